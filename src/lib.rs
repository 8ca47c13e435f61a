// #![deny(missing_docs)]

//! Content-aware image resizing: gradient-magnitude energy, a
//! direction-agnostic minimum-seam search, and in-place seam removal
//! over an owned pixel grid.

extern crate image;

pub mod ternary;

pub mod pixel;
pub use pixel::Rgb;

pub mod grid;
pub use grid::{Raster, RasterError};

pub mod energy;
pub use energy::{energy_map, energy_to_image, pixel_energy};

pub mod seamfinder;
pub use seamfinder::{Seam, SeamFinder};

pub mod search;
pub use search::{find_seam, Orientation};

pub mod carver;
pub use carver::{CarveError, SeamCarver};
