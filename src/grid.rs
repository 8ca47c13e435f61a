// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The rectangular cell buffer behind everything in this crate.
//!
//! One type stores them all: the pixel grid being carved, the energy
//! map, and the seam search's distance table are all a `Raster` of some
//! `Copy` cell.  The buffer is a single flat `Vec` with the width as the
//! row stride, and every public constructor checks the shape, so a
//! `Raster` you can name is rectangular and holds at least one cell.

use std::ops::{Index, IndexMut};

use failure::Fail;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use itertools::iproduct;

use crate::pixel::Rgb;

/// The ways a caller can hand us a malformed grid.  All of these are
/// construction-time failures; once a `Raster` exists its shape only
/// changes through the seam-removal mutators, which keep it rectangular.
#[derive(Debug, Fail, PartialEq)]
pub enum RasterError {
    /// No rows, no columns, or no cells at all.
    #[fail(display = "a raster needs at least one row and one column")]
    Empty,

    /// A row whose length disagrees with the first row's.
    #[fail(display = "row {} holds {} cells where {} were expected", row, found, expected)]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A flat cell vector that does not fill the claimed dimensions.
    #[fail(display = "{} cells cannot fill a {}x{} raster", found, width, height)]
    CellCount {
        width: u32,
        height: u32,
        found: usize,
    },
}

/// An addressable two-dimensional field of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<T: Copy> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T: Copy> Raster<T> {
    // Internal tables (energy, distance) start from a fill value and are
    // shaped by code that has already validated the dimensions.
    pub(crate) fn filled(width: u32, height: u32, fill: T) -> Self {
        Raster {
            width,
            height,
            cells: vec![fill; width as usize * height as usize],
        }
    }

    /// Build a raster from a flat, row-major cell vector.
    pub fn from_cells(width: u32, height: u32, cells: Vec<T>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::Empty);
        }
        if cells.len() != width as usize * height as usize {
            return Err(RasterError::CellCount {
                width,
                height,
                found: cells.len(),
            });
        }
        Ok(Raster {
            width,
            height,
            cells,
        })
    }

    /// Build a raster from nested rows, top to bottom.  The first row
    /// fixes the width; any row disagreeing with it is rejected.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, RasterError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(RasterError::Empty);
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(RasterError::Ragged {
                    row,
                    expected: width,
                    found: cols.len(),
                });
            }
            cells.extend(cols);
        }
        Ok(Raster {
            width: width as u32,
            height: height as u32,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The flat row-major cell slice.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    // The number one rule of this type: keep the index math in a single
    // location and never, ever repeat it.  Same row-major variant as
    // image.rs uses.
    fn cell_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    // Shrink by one row.  Row-major storage makes this a truncation.
    pub(crate) fn drop_last_row(&mut self) {
        self.cells
            .truncate(self.width as usize * (self.height as usize - 1));
        self.height -= 1;
    }

    // Shrink by one column: compact every row down to its first
    // `width - 1` cells, then cut the tail off.  Rows are compacted top
    // to bottom, so each destination sits at or before its source.
    pub(crate) fn drop_last_column(&mut self) {
        let old = self.width as usize;
        let new = old - 1;
        for y in 1..self.height as usize {
            self.cells.copy_within(y * old..y * old + new, y * new);
        }
        self.cells.truncate(new * self.height as usize);
        self.width -= 1;
    }
}

impl<T: Copy> Index<(u32, u32)> for Raster<T> {
    type Output = T;

    fn index(&self, (x, y): (u32, u32)) -> &T {
        let index = self.cell_index(x, y);
        &self.cells[index]
    }
}

impl<T: Copy> IndexMut<(u32, u32)> for Raster<T> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut T {
        let index = self.cell_index(x, y);
        &mut self.cells[index]
    }
}

impl<S: Primitive + 'static> Raster<Rgb<S>> {
    /// Capture the pixels of any decoded image.  Pixels are reduced to
    /// their RGB channels; alpha does not participate in seam energy.
    pub fn from_image<I, P>(image: &I) -> Result<Self, RasterError>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
    {
        let (width, height) = image.dimensions();
        let cells = iproduct!(0..height, 0..width)
            .map(|(y, x)| {
                let rgb = image.get_pixel(x, y).to_rgb();
                let c = rgb.channels();
                Rgb::new(c[0], c[1], c[2])
            })
            .collect();
        Raster::from_cells(width, height, cells)
    }

    /// Lay the grid back out as an `image` buffer for encoding.
    pub fn to_image(&self) -> ImageBuffer<image::Rgb<S>, Vec<S>> {
        let mut out = ImageBuffer::new(self.width, self.height);
        for (y, x) in iproduct!(0..self.height, 0..self.width) {
            let p = self[(x, y)];
            out.put_pixel(x, y, *Pixel::from_slice(&[p.red, p.green, p.blue]));
        }
        out
    }
}
