// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The carver: owns one image, finds seams in it, removes them.
//!
//! Seams are ephemeral.  Every removal shifts the indices a seam was
//! expressed in, so a seam held across a removal no longer describes
//! the image it was found on.

use failure::Fail;
use image::Primitive;

use crate::grid::Raster;
use crate::pixel::Rgb;
use crate::search::{find_seam, Orientation};
use crate::seamfinder::{Seam, SeamFinder};

/// The ways the carve driver can refuse a target size.
#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// Seam carving only shrinks; growing is a different algorithm.
    #[fail(
        display = "cannot grow a {}x{} image to {}x{}",
        width, height, target_width, target_height
    )]
    Upscale {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },

    /// Carving down to nothing would leave no image to return.
    #[fail(display = "the target size must keep at least one row and one column")]
    EmptyTarget,
}

/// Holds the image being carved, plus its dimensions.  The cached
/// width and height always equal the live grid's; only the removal
/// operations touch either.
pub struct SeamCarver<S: Primitive + 'static> {
    image: Raster<Rgb<S>>,
    width: u32,
    height: u32,
}

impl<S: Primitive + 'static> SeamCarver<S> {
    /// Take ownership of an image.  A `Raster` is rectangular and
    /// non-empty by construction, so there is nothing here to fail.
    pub fn new(image: Raster<Rgb<S>>) -> Self {
        let (width, height) = image.dimensions();
        SeamCarver {
            image,
            width,
            height,
        }
    }

    /// The current image, read-only.
    pub fn image(&self) -> &Raster<Rgb<S>> {
        &self.image
    }

    /// Columns remaining.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Rows remaining.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Surrender the carved image.
    pub fn into_image(self) -> Raster<Rgb<S>> {
        self.image
    }

    /// Remove a horizontal seam: in every column, the pixel at the row
    /// the seam names is overwritten by the pixels below it, and the
    /// image ends one row shorter.
    ///
    /// # Panics
    ///
    /// The seam must describe the image as it is now: one row index per
    /// current column, every index within the current height.  A stale
    /// or malformed seam panics here, before any pixel has moved.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) {
        assert_eq!(
            seam.len(),
            self.width as usize,
            "horizontal seam carries {} entries for an image {} columns wide",
            seam.len(),
            self.width
        );
        for (x, &row) in seam.iter().enumerate() {
            assert!(
                row < self.height,
                "horizontal seam names row {} at column {}, but the image is {} rows tall",
                row,
                x,
                self.height
            );
        }

        for (x, &row) in seam.iter().enumerate() {
            let x = x as u32;
            for y in row..self.height - 1 {
                self.image[(x, y)] = self.image[(x, y + 1)];
            }
        }
        self.image.drop_last_row();
        self.height -= 1;
    }

    /// Remove a vertical seam: in every row, the pixels to the right of
    /// the seam slide one column left, and the image ends one column
    /// narrower.
    ///
    /// # Panics
    ///
    /// Same contract as [`SeamCarver::remove_horizontal_seam`], with the
    /// axes swapped: one column index per current row, each within the
    /// current width.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) {
        assert_eq!(
            seam.len(),
            self.height as usize,
            "vertical seam carries {} entries for an image {} rows tall",
            seam.len(),
            self.height
        );
        for (y, &col) in seam.iter().enumerate() {
            assert!(
                col < self.width,
                "vertical seam names column {} at row {}, but the image is {} columns wide",
                col,
                y,
                self.width
            );
        }

        for (y, &col) in seam.iter().enumerate() {
            let y = y as u32;
            for x in col..self.width - 1 {
                self.image[(x, y)] = self.image[(x + 1, y)];
            }
        }
        self.image.drop_last_column();
        self.width -= 1;
    }

    /// Carve down to a target size, one seam at a time.  Directions
    /// alternate while both dimensions are oversize, then whichever axis
    /// still has distance to cover finishes alone.
    pub fn carve(&mut self, target_width: u32, target_height: u32) -> Result<(), CarveError> {
        if target_width == 0 || target_height == 0 {
            return Err(CarveError::EmptyTarget);
        }
        if target_width > self.width || target_height > self.height {
            return Err(CarveError::Upscale {
                width: self.width,
                height: self.height,
                target_width,
                target_height,
            });
        }

        let mut direction = Orientation::Vertical;
        while self.width > target_width && self.height > target_height {
            self.carve_once(direction);
            direction = direction.turn();
        }
        while self.width > target_width {
            self.carve_once(Orientation::Vertical);
        }
        while self.height > target_height {
            self.carve_once(Orientation::Horizontal);
        }
        Ok(())
    }

    fn carve_once(&mut self, direction: Orientation) {
        match direction {
            Orientation::Vertical => {
                let seam = self.find_vertical_seam();
                self.remove_vertical_seam(&seam);
            }
            Orientation::Horizontal => {
                let seam = self.find_horizontal_seam();
                self.remove_horizontal_seam(&seam);
            }
        }
    }
}

impl<S: Primitive + 'static> SeamFinder for SeamCarver<S> {
    fn find_horizontal_seam(&self) -> Seam {
        // A one-row image has exactly one horizontal seam.
        if self.height == 1 {
            return vec![0; self.width as usize];
        }
        find_seam(&self.image, Orientation::Horizontal)
    }

    fn find_vertical_seam(&self) -> Seam {
        if self.width == 1 {
            return vec![0; self.height as usize];
        }
        find_seam(&self.image, Orientation::Vertical)
    }
}
