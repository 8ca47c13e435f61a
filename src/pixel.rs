// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel sample and the channel arithmetic between pixel pairs.
//!
//! Everything downstream of here works in `f64`; the sample type is
//! whatever the source image provides, and the cast happens exactly
//! once, in this module.

use image::Primitive;
use num_traits::NumCast;

/// A three-channel color sample.  Generic over the subpixel type so the
/// carver accepts 8-bit and 16-bit images alike.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgb<S: Primitive> {
    pub red: S,
    pub green: S,
    pub blue: S,
}

impl<S: Primitive> Rgb<S> {
    pub fn new(red: S, green: S, blue: S) -> Self {
        Rgb { red, green, blue }
    }
}

/// (Pixel, Pixel) -> summed squared channel difference.
///
/// The horizontal and vertical halves of the gradient each come from one
/// call to this; the caller adds them and takes the square root.
#[inline]
pub fn delta_squared<S>(p1: &Rgb<S>, p2: &Rgb<S>) -> f64
where
    S: Primitive + 'static,
{
    #[inline]
    fn channel<S>(c: S) -> f64
    where
        S: Primitive + 'static,
    {
        NumCast::from(c).unwrap()
    }

    let dr = channel(p1.red) - channel(p2.red);
    let dg = channel(p1.green) - channel(p2.green);
    let db = channel(p1.blue) - channel(p2.blue);
    dr * dr + dg * dg + db * db
}
