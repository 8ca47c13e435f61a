/// A one-line conditional expression.  The border-clamping rules in the
/// seam search read as a matrix of condition/value pairs, and `cargo fmt`
/// splits a bare `if` expression across four lines; this keeps each rule
/// on its own line.
#[macro_export]
macro_rules! pick {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
