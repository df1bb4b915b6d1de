/*
coverage.rs

Copyright 2025 Hervé Quatremain

This file is part of Wirefill.

Wirefill is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wirefill is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wirefill. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Build a path that visits every cell of the grid.
//!
//! Three strategies are available, see [`PathStrategy`]. A strategy draws its path on a canonical
//! "canvas" starting in the top left corner. An [`Orientation`] then transposes and mirrors the
//! canvas onto the grid, which multiplies the number of distinct layouts without changing the
//! construction. Mirroring and transposing keep consecutive cells adjacent, so every variant
//! is as complete as the canonical path.
//!
//! [`checked_path`] verifies the result and falls back to the plain row-by-row zigzag,
//! which is always complete, if something went wrong.

use log::{Level, debug, log_enabled, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::coordinate::Coordinate;
use super::path::CoveragePath;
use super::random_source::RandomSource;

/// Path construction strategy.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PathStrategy {
    /// Sweep the lines of the grid, alternating direction on every line.
    Zigzag,

    /// Concentric rings, inward or outward.
    Spiral,

    /// Bands of several lines, each band swept completely before moving to the next one.
    Snake,
}

/// All the strategies. [`PathStrategy::random`] picks one uniformly.
pub const STRATEGIES: [PathStrategy; 3] =
    [PathStrategy::Zigzag, PathStrategy::Spiral, PathStrategy::Snake];

impl fmt::Display for PathStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathStrategy::Zigzag => write!(f, "zigzag"),
            PathStrategy::Spiral => write!(f, "spiral"),
            PathStrategy::Snake => write!(f, "snake"),
        }
    }
}

impl PathStrategy {
    /// Select a random strategy.
    pub fn random(rng: &mut RandomSource) -> Self {
        STRATEGIES[rng.next_int(0, STRATEGIES.len() - 1)]
    }

    /// Return the raw list of cells produced by the strategy for a `rows` x `cols` grid.
    ///
    /// The list is not verified. Use [`build_coverage_path`] to get a checked path.
    pub fn cells(&self, rows: usize, cols: usize, rng: &mut RandomSource) -> Vec<Coordinate> {
        let orientation: Orientation = Orientation::random(rng);
        let (canvas_rows, canvas_cols) = orientation.canvas(rows, cols);

        let (canvas, reverse): (Vec<Coordinate>, bool) = match self {
            PathStrategy::Zigzag => {
                // Alternation phase: walk the sweep from its last cell
                let reverse: bool = rng.chance(0.5);
                (zigzag(canvas_rows, canvas_cols), reverse)
            }
            PathStrategy::Spiral => {
                // Outward spirals are inward spirals walked backward
                let outward: bool = rng.chance(0.5);
                (spiral(canvas_rows, canvas_cols), outward)
            }
            PathStrategy::Snake => {
                let band_height: usize = rng.next_int(2, (canvas_rows / 2).max(2));
                (snake(canvas_rows, canvas_cols, band_height, rng), false)
            }
        };
        debug!("Strategy = {self}  orientation = {orientation:?}  reverse = {reverse}");

        let mut cells: Vec<Coordinate> = canvas
            .into_iter()
            .map(|c| orientation.apply(c, rows, cols))
            .collect();
        if reverse {
            cells.reverse();
        }
        cells
    }
}

/// Build a path over the whole grid with a randomly selected strategy.
///
/// Return the strategy that produced the path, and the path. If the strategy output is not a
/// complete path, then the deterministic zigzag is returned instead.
pub fn build_coverage_path(
    rows: usize,
    cols: usize,
    rng: &mut RandomSource,
) -> (PathStrategy, CoveragePath) {
    let strategy: PathStrategy = PathStrategy::random(rng);
    let cells: Vec<Coordinate> = strategy.cells(rows, cols, rng);
    checked_path(strategy, &cells, rows, cols)
}

/// Turn the raw cells produced by a strategy into a path.
///
/// Repeated cells are dropped. If the remaining cells do not cover the grid, then the strategy
/// output is discarded and the deterministic zigzag is returned instead.
pub fn checked_path(
    strategy: PathStrategy,
    cells: &[Coordinate],
    rows: usize,
    cols: usize,
) -> (PathStrategy, CoveragePath) {
    let path: CoveragePath = CoveragePath::from_cells(cells);

    if path.len() != cells.len() {
        debug!(
            "Strategy {strategy} repeated {} cells",
            cells.len() - path.len()
        );
    }
    if !path.covers(rows, cols) {
        warn!(
            "Strategy {strategy} produced {} cells instead of {}: using the default zigzag",
            path.len(),
            rows * cols
        );
        return (
            PathStrategy::Zigzag,
            CoveragePath::from_cells(&zigzag(rows, cols)),
        );
    }
    if log_enabled!(Level::Debug) {
        debug!("Coverage path = {:?}", path.get());
    }
    (strategy, path)
}

/// Transposition and mirroring applied to the canonical canvas.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Orientation {
    /// Sweep columns instead of rows.
    pub transpose: bool,

    /// Start from the bottom of the grid.
    pub flip_rows: bool,

    /// Start from the right of the grid.
    pub flip_cols: bool,
}

impl Orientation {
    /// Select a random orientation.
    pub fn random(rng: &mut RandomSource) -> Self {
        Self {
            transpose: rng.chance(0.5),
            flip_rows: rng.chance(0.5),
            flip_cols: rng.chance(0.5),
        }
    }

    /// Dimensions of the canvas for a `rows` x `cols` grid.
    pub fn canvas(&self, rows: usize, cols: usize) -> (usize, usize) {
        if self.transpose {
            (cols, rows)
        } else {
            (rows, cols)
        }
    }

    /// Convert a canvas cell into a grid cell.
    pub fn apply(&self, cell: Coordinate, rows: usize, cols: usize) -> Coordinate {
        let (mut row, mut col) = if self.transpose {
            (cell.col, cell.row)
        } else {
            (cell.row, cell.col)
        };
        if self.flip_rows {
            row = rows - 1 - row;
        }
        if self.flip_cols {
            col = cols - 1 - col;
        }
        Coordinate::new(row, col)
    }
}

/// Row-by-row sweep starting at the top left corner. The direction changes on every row.
pub fn zigzag(rows: usize, cols: usize) -> Vec<Coordinate> {
    let mut cells: Vec<Coordinate> = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        if row % 2 == 0 {
            cells.extend((0..cols).map(|col| Coordinate::new(row, col)));
        } else {
            cells.extend((0..cols).rev().map(|col| Coordinate::new(row, col)));
        }
    }
    cells
}

/// Clockwise spiral starting at the top left corner and ending in the center.
fn spiral(rows: usize, cols: usize) -> Vec<Coordinate> {
    let mut cells: Vec<Coordinate> = Vec::with_capacity(rows * cols);
    if rows == 0 || cols == 0 {
        return cells;
    }
    let mut top: usize = 0;
    let mut left: usize = 0;
    let mut bottom: usize = rows - 1;
    let mut right: usize = cols - 1;

    loop {
        // Top side, left to right
        cells.extend((left..=right).map(|c| Coordinate::new(top, c)));
        // Right side, downward
        cells.extend((top + 1..=bottom).map(|r| Coordinate::new(r, right)));
        // Bottom side, right to left
        if top < bottom {
            cells.extend((left..right).rev().map(|c| Coordinate::new(bottom, c)));
        }
        // Left side, upward
        if left < right {
            cells.extend((top + 1..bottom).rev().map(|r| Coordinate::new(r, left)));
        }

        // Next ring
        if bottom - top < 2 || right - left < 2 {
            break;
        }
        top += 1;
        left += 1;
        bottom -= 1;
        right -= 1;
    }
    cells
}

/// Bands of `band_height` rows. The last band can be shorter.
///
/// Inside a band, the cells are swept either row by row, or column by column when the number of
/// columns is odd (a column sweep only ends at the bottom of the band for an odd number of
/// columns). Every band ends on its bottom row, right above the first cell of the next band.
fn snake(
    rows: usize,
    cols: usize,
    band_height: usize,
    rng: &mut RandomSource,
) -> Vec<Coordinate> {
    let mut cells: Vec<Coordinate> = Vec::with_capacity(rows * cols);
    let band_height: usize = band_height.max(1);

    // Side of the grid where the current band starts
    let mut from_left: bool = true;
    let mut top: usize = 0;

    while top < rows {
        let height: usize = band_height.min(rows - top);
        let columns: Vec<usize> = if from_left {
            (0..cols).collect()
        } else {
            (0..cols).rev().collect()
        };

        if height > 1 && cols % 2 == 1 && rng.chance(0.5) {
            for (i, col) in columns.iter().enumerate() {
                if i % 2 == 0 {
                    cells.extend((top..top + height).map(|r| Coordinate::new(r, *col)));
                } else {
                    cells.extend((top..top + height).rev().map(|r| Coordinate::new(r, *col)));
                }
            }
            from_left = !from_left;
        } else {
            for i in 0..height {
                if i % 2 == 0 {
                    cells.extend(columns.iter().map(|c| Coordinate::new(top + i, *c)));
                } else {
                    cells.extend(columns.iter().rev().map(|c| Coordinate::new(top + i, *c)));
                }
            }
            if height % 2 == 1 {
                from_left = !from_left;
            }
        }
        top += height;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: [(usize, usize); 9] = [
        (2, 2),
        (2, 3),
        (3, 2),
        (3, 3),
        (4, 7),
        (5, 5),
        (6, 4),
        (9, 9),
        (12, 12),
    ];

    fn assert_covers(cells: &[Coordinate], rows: usize, cols: usize) {
        let path: CoveragePath = CoveragePath::from_cells(cells);
        assert_eq!(path.len(), cells.len(), "repeated cells in {cells:?}");
        assert!(path.covers(rows, cols), "{rows}x{cols}: {cells:?}");
    }

    #[test]
    fn canonical_paths_cover_the_grid() {
        for (rows, cols) in SIZES {
            assert_covers(&zigzag(rows, cols), rows, cols);
            assert_covers(&spiral(rows, cols), rows, cols);
            for band in 1..=rows {
                let mut rng: RandomSource = RandomSource::new(band as u32);
                assert_covers(&snake(rows, cols, band, &mut rng), rows, cols);
            }
        }
    }

    #[test]
    fn every_strategy_and_orientation_covers_the_grid() {
        for (rows, cols) in SIZES {
            for strategy in STRATEGIES {
                for seed in 0..40 {
                    let mut rng: RandomSource = RandomSource::new(seed);
                    let cells: Vec<Coordinate> = strategy.cells(rows, cols, &mut rng);
                    assert_covers(&cells, rows, cols);
                }
            }
        }
    }

    #[test]
    fn spiral_goes_inward() {
        let cells: Vec<Coordinate> = spiral(3, 3);
        assert_eq!(cells[0], Coordinate::new(0, 0));
        assert_eq!(cells[8], Coordinate::new(1, 1));
    }

    #[test]
    fn orientation_maps_corners() {
        let o: Orientation = Orientation {
            transpose: true,
            flip_rows: true,
            flip_cols: false,
        };
        // 2 rows, 3 columns: the canvas has 3 rows and 2 columns
        assert_eq!(o.canvas(2, 3), (3, 2));
        assert_eq!(o.apply(Coordinate::new(0, 0), 2, 3), Coordinate::new(1, 0));
        assert_eq!(o.apply(Coordinate::new(2, 1), 2, 3), Coordinate::new(0, 2));
    }

    #[test]
    fn strategies_produce_different_layouts() {
        let mut layouts: Vec<Vec<Coordinate>> = Vec::new();
        for seed in 0..60 {
            let mut rng: RandomSource = RandomSource::new(seed);
            let (_, path) = build_coverage_path(6, 6, &mut rng);
            if !layouts.contains(path.get()) {
                layouts.push(path.get().clone());
            }
        }
        assert!(layouts.len() >= 8, "only {} layouts", layouts.len());
    }

    #[test]
    fn broken_strategy_output_falls_back_to_zigzag() {
        let expected: Vec<Coordinate> = zigzag(3, 4);

        // Missing cells
        let (strategy, path) = checked_path(PathStrategy::Spiral, &spiral(3, 4)[..10], 3, 4);
        assert_eq!(strategy, PathStrategy::Zigzag);
        assert_eq!(path.get(), &expected);

        // Repeated cell: once removed, the path jumps over it
        let mut repeated: Vec<Coordinate> = spiral(3, 4);
        repeated[5] = repeated[3];
        let (strategy, path) = checked_path(PathStrategy::Snake, &repeated, 3, 4);
        assert_eq!(strategy, PathStrategy::Zigzag);
        assert_eq!(path.get(), &expected);

        // Cell outside the grid
        let mut outside: Vec<Coordinate> = spiral(3, 4);
        outside[11] = Coordinate::new(3, 0);
        let (strategy, _) = checked_path(PathStrategy::Spiral, &outside, 3, 4);
        assert_eq!(strategy, PathStrategy::Zigzag);

        // A valid path is kept
        let (strategy, path) = checked_path(PathStrategy::Spiral, &spiral(3, 4), 3, 4);
        assert_eq!(strategy, PathStrategy::Spiral);
        assert_eq!(path.get(), &spiral(3, 4));
    }

    #[test]
    fn build_is_deterministic() {
        let mut a: RandomSource = RandomSource::new(2024);
        let mut b: RandomSource = RandomSource::new(2024);
        let (sa, pa) = build_coverage_path(7, 5, &mut a);
        let (sb, pb) = build_coverage_path(7, 5, &mut b);
        assert_eq!(sa, sb);
        assert_eq!(pa, pb);
    }
}
