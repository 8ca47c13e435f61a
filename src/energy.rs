// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image.
//!
//! The energy at a pixel is the magnitude of the local color gradient,
//! taken with central differences over all three channels and folded
//! into one Euclidean norm.  Neighbor lookup is toroidal: column 0 and
//! the last column are adjacent, as are the first and last rows, so
//! border pixels use the same four-neighbor formula as everything else.

use image::{ImageBuffer, Luma, Pixel, Primitive};
use itertools::iproduct;

use crate::grid::Raster;
use crate::pick;
use crate::pixel::{delta_squared, Rgb};

/// The gradient magnitude at `(x, y)`:
/// `sqrt(Σ(channel_x)² + Σ(channel_y)²)` over red, green, and blue.
/// Always finite and non-negative; exactly 0 wherever all four toroidal
/// neighbors agree with each other.
pub fn pixel_energy<S>(image: &Raster<Rgb<S>>, x: u32, y: u32) -> f64
where
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let left = image[((x + width - 1) % width, y)];
    let right = image[((x + 1) % width, y)];
    let up = image[(x, (y + height - 1) % height)];
    let down = image[(x, (y + 1) % height)];

    (delta_squared(&left, &right) + delta_squared(&up, &down)).sqrt()
}

/// The full width × height energy table.  The seam search itself reads
/// energies cell by cell; this table exists for callers that want the
/// whole field at once, such as the visualization below.
pub fn energy_map<S>(image: &Raster<Rgb<S>>) -> Raster<f64>
where
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut emap = Raster::filled(width, height, 0.0);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = pixel_energy(image, x, y);
    }
    emap
}

/// Render an energy table as an 8-bit graymap, scaled so the hottest
/// pixel lands on 255.  A field of all zeros stays black.
pub fn energy_to_image(energy: &Raster<f64>) -> ImageBuffer<Luma<u8>, Vec<u8>> {
    let (width, height) = energy.dimensions();
    let ceiling = energy.cells().iter().cloned().fold(0.0f64, f64::max);

    let mut out = ImageBuffer::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let level = pick!(ceiling == 0.0, 0.0, energy[(x, y)] * 255.0 / ceiling);
        out.put_pixel(x, y, *Pixel::from_slice(&[level.round() as u8]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grays(rows: &[&[u8]]) -> Raster<Rgb<u8>> {
        Raster::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&v| Rgb::new(v, v, v)).collect())
                .collect(),
        )
        .unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn uniform_image_has_zero_energy_everywhere() {
        let image = grays(&[&[7, 7, 7], &[7, 7, 7], &[7, 7, 7]]);
        let emap = energy_map(&image);
        assert!(emap.cells().iter().all(|&e| e == 0.0));
    }

    #[test]
    fn single_pixel_is_its_own_neighbor() {
        let image = grays(&[&[200]]);
        assert_eq!(pixel_energy(&image, 0, 0), 0.0);
    }

    #[test]
    fn gradient_fixture_matches_hand_computation() {
        let image = grays(&[&[10, 20, 30], &[40, 50, 60], &[70, 80, 90]]);

        // (0,0): left wraps to 30, right is 20; up wraps to 70, down is 40.
        let corner: f64 = (3.0f64 * 100.0 + 3.0 * 900.0).sqrt();
        assert!(close(pixel_energy(&image, 0, 0), corner));

        // (1,1): 40 vs 60 across, 20 vs 80 down.
        let center: f64 = (3.0f64 * 400.0 + 3.0 * 3600.0).sqrt();
        assert!(close(pixel_energy(&image, 1, 1), center));
    }

    #[test]
    fn energy_is_never_negative() {
        let image = grays(&[&[9, 0, 9, 200], &[0, 255, 13, 1], &[90, 9, 0, 77]]);
        let emap = energy_map(&image);
        assert!(emap.cells().iter().all(|&e| e >= 0.0));
    }

    #[test]
    fn visualization_scales_the_hottest_pixel_to_white() {
        let image = grays(&[&[0, 0, 0], &[0, 100, 0], &[0, 0, 0]]);
        let shot = energy_to_image(&energy_map(&image));
        assert!(shot.pixels().any(|p| p.channels()[0] == 255));
    }

    #[test]
    fn visualization_of_flat_field_is_black() {
        let image = grays(&[&[42, 42], &[42, 42]]);
        let shot = energy_to_image(&energy_map(&image));
        assert!(shot.pixels().all(|p| p.channels()[0] == 0));
    }
}
