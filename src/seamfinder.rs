/// One coordinate per step along the perpendicular axis: column indices
/// for a vertical seam, row indices for a horizontal one.  Adjacent
/// entries differ by at most 1.  A seam indexes into the grid as it was
/// when the seam was found; any removal invalidates it.
pub type Seam = Vec<u32>;

/// This trait defines how seams are requested from a carver.  It's a
/// primitive interface, just enough room for alternative finder
/// strategies later without touching the callers.
pub trait SeamFinder {
    /// A left-to-right seam, one row index per column of the current
    /// image.
    fn find_horizontal_seam(&self) -> Seam;

    /// A top-to-bottom seam, one column index per row of the current
    /// image.
    fn find_vertical_seam(&self) -> Seam;
}
