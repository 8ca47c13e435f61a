// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The minimum-seam search.
//!
//! One dynamic program serves both directions.  The search thinks in
//! (main, cross) coordinates: the main axis is the one seam positions
//! are drawn from (width for a vertical seam, height for a horizontal
//! one), the cross axis is the one the seam steps along.  `Orientation`
//! maps those back to pixel (x, y), and nothing else in the algorithm
//! knows which way it is facing.

use image::Primitive;

use crate::energy::pixel_energy;
use crate::grid::Raster;
use crate::pick;
use crate::pixel::Rgb;
use crate::seamfinder::Seam;

/// Which way a seam runs through the image.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    /// Left to right, one row index per column; removal shrinks the
    /// height.
    Horizontal,
    /// Top to bottom, one column index per row; removal shrinks the
    /// width.
    Vertical,
}

impl Orientation {
    /// (main, cross) extents of a grid with the given dimensions.
    fn spans(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Orientation::Horizontal => (height, width),
            Orientation::Vertical => (width, height),
        }
    }

    /// Search coordinates back to pixel coordinates.
    fn locate(self, main: u32, cross: u32) -> (u32, u32) {
        match self {
            Orientation::Horizontal => (cross, main),
            Orientation::Vertical => (main, cross),
        }
    }

    /// The other direction.
    pub fn turn(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Find the cheapest seam of the given orientation.
///
/// The returned seam has one entry per cross-axis step, each a main-axis
/// position, with adjacent entries never more than one apart.  Given the
/// same grid twice, the same seam comes back twice.
pub fn find_seam<S>(image: &Raster<Rgb<S>>, orientation: Orientation) -> Seam
where
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let (main_size, cross_size) = orientation.spans(width, height);

    // With a single main position there is nowhere to search; every step
    // of the seam sits at 0.
    if main_size == 1 {
        return vec![0; cross_size as usize];
    }

    let energy_at = |main: u32, cross: u32| {
        let (x, y) = orientation.locate(main, cross);
        pixel_energy(image, x, y)
    };

    // Forward pass.  distance[(m, c)] is the cheapest total energy of a
    // seam prefix that ends at main position m after c steps.
    let mut distance = Raster::filled(main_size, cross_size, 0.0f64);
    for main in 0..main_size {
        distance[(main, 0)] = energy_at(main, 0);
    }

    let last = main_size - 1;
    for cross in 1..cross_size {
        for main in 0..main_size {
            // Predecessors clamp at the borders.  The seam graph never
            // wraps, unlike the energy function's neighbor lookup.
            let lo = pick!(main == 0, 0, main - 1);
            let hi = pick!(main == last, last, main + 1);
            let mut least = distance[(lo, cross - 1)];
            for m in lo + 1..=hi {
                least = least.min(distance[(m, cross - 1)]);
            }
            distance[(main, cross)] = energy_at(main, cross) + least;
        }
    }

    // The endpoint is the first minimum of the final slice.
    let goal = cross_size - 1;
    let mut tail = 0;
    let mut tail_cost = distance[(0, goal)];
    for main in 1..main_size {
        if distance[(main, goal)] < tail_cost {
            tail_cost = distance[(main, goal)];
            tail = main;
        }
    }

    // Walk back to the first slice, re-deriving which predecessor filled
    // each cell.  Equal costs resolve toward the lower main index; if
    // these comparisons are reordered, equal-cost images start returning
    // different (if equally cheap) seams.
    let mut seam = Vec::with_capacity(cross_size as usize);
    seam.push(tail);
    let mut main = tail;
    for cross in (1..cross_size).rev() {
        let straight = distance[(main, cross - 1)];
        let next = if main == 0 {
            pick!(straight <= distance[(1, cross - 1)], 0, 1)
        } else if main == last {
            pick!(straight <= distance[(last - 1, cross - 1)], last, last - 1)
        } else {
            let lower = distance[(main - 1, cross - 1)];
            let upper = distance[(main + 1, cross - 1)];
            if straight < lower {
                pick!(straight > upper, main + 1, main)
            } else {
                pick!(lower > upper, main + 1, main - 1)
            }
        };
        seam.push(next);
        main = next;
    }

    seam.reverse();
    seam
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

    fn transpose(image: &Raster<Rgb<u8>>) -> Raster<Rgb<u8>> {
        let (width, height) = image.dimensions();
        let rows = (0..width)
            .map(|x| (0..height).map(|y| image[(x, y)]).collect())
            .collect();
        Raster::from_rows(rows).unwrap()
    }

    fn seam_cost(image: &Raster<Rgb<u8>>, orientation: Orientation, seam: &[u32]) -> f64 {
        seam.iter()
            .enumerate()
            .map(|(cross, &main)| {
                let (x, y) = orientation.locate(main, cross as u32);
                pixel_energy(image, x, y)
            })
            .sum()
    }

    // Each column is y * 30 except column 2, which is flat; column 2 is
    // the only path with zero gradient in both directions.
    fn ramp_with_flat_column() -> Raster<Rgb<u8>> {
        grays(&[
            &[0, 0, 40, 0, 0],
            &[30, 30, 40, 30, 30],
            &[60, 60, 40, 60, 60],
            &[90, 90, 40, 90, 90],
        ])
    }

    #[test]
    fn vertical_seam_follows_the_flat_column() {
        let image = ramp_with_flat_column();
        assert_eq!(find_seam(&image, Orientation::Vertical), vec![2, 2, 2, 2]);
    }

    #[test]
    fn seam_is_connected_and_in_bounds() {
        let image = grays(&[
            &[9, 0, 9, 200, 14],
            &[0, 255, 13, 1, 99],
            &[90, 9, 0, 77, 255],
            &[3, 128, 41, 0, 6],
        ]);
        for &orientation in &[Orientation::Horizontal, Orientation::Vertical] {
            let (main_size, cross_size) = orientation.spans(5, 4);
            let seam = find_seam(&image, orientation);
            assert_eq!(seam.len(), cross_size as usize);
            assert!(seam.iter().all(|&m| m < main_size));
            for pair in seam.windows(2) {
                let gap = (i64::from(pair[0]) - i64::from(pair[1])).abs();
                assert!(gap <= 1, "seam jumps by {}", gap);
            }
        }
    }

    #[test]
    fn found_seam_is_no_worse_than_any_straight_line() {
        let image = grays(&[
            &[12, 240, 7, 55],
            &[200, 3, 99, 140],
            &[31, 76, 210, 8],
        ]);
        let seam = find_seam(&image, Orientation::Vertical);
        let found = seam_cost(&image, Orientation::Vertical, &seam);
        let best_straight = (0..4)
            .map(|x| (0..3).map(|y| pixel_energy(&image, x, y)).sum::<f64>())
            .fold(f64::INFINITY, f64::min);
        assert!(found <= best_straight + 1e-9);
    }

    #[test]
    fn search_is_deterministic() {
        let image = grays(&[
            &[9, 0, 9, 200, 14],
            &[0, 255, 13, 1, 99],
            &[90, 9, 0, 77, 255],
        ]);
        assert_eq!(
            find_seam(&image, Orientation::Vertical),
            find_seam(&image, Orientation::Vertical)
        );
        assert_eq!(
            find_seam(&image, Orientation::Horizontal),
            find_seam(&image, Orientation::Horizontal)
        );
    }

    #[test]
    fn uniform_image_ties_resolve_to_the_first_position() {
        let image = grays(&[&[5, 5, 5], &[5, 5, 5], &[5, 5, 5]]);
        assert_eq!(find_seam(&image, Orientation::Vertical), vec![0, 0, 0]);
        assert_eq!(find_seam(&image, Orientation::Horizontal), vec![0, 0, 0]);
    }

    #[test]
    fn horizontal_search_is_the_transposed_vertical_search() {
        let image = grays(&[
            &[12, 240, 7, 55],
            &[200, 3, 99, 140],
            &[31, 76, 210, 8],
        ]);
        assert_eq!(
            find_seam(&image, Orientation::Horizontal),
            find_seam(&transpose(&image), Orientation::Vertical)
        );
    }

    #[test]
    fn single_position_grid_skips_the_search() {
        let image = grays(&[&[10], &[200], &[10]]);
        assert_eq!(find_seam(&image, Orientation::Vertical), vec![0, 0, 0]);
    }
}
