/*
path.rs

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

//! Path over the grid cells.

use std::collections::HashSet;
use std::ops::Range;

use super::coordinate::Coordinate;

/// Path object.
///
/// A path never contains the same cell twice: [`CoveragePath::push`] ignores cells that are
/// already in the path.
#[derive(Debug, Default, Clone)]
pub struct CoveragePath {
    /// Path as an ordered list of cells.
    path: Vec<Coordinate>,

    /// Stores the visited status of the cell.
    /// Instead of looking for the cell in the [`CoveragePath::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<Coordinate>,
}

impl PartialEq for CoveragePath {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl CoveragePath {
    /// Create a [`CoveragePath`] object.
    pub fn new(num_cells: usize) -> Self {
        Self {
            path: Vec::with_capacity(num_cells),
            visited: HashSet::with_capacity(num_cells),
        }
    }

    /// Create a [`CoveragePath`] object from a list of cells.
    ///
    /// Repeated cells are dropped; only their first occurrence is kept.
    pub fn from_cells(cells: &[Coordinate]) -> Self {
        let mut p: CoveragePath = CoveragePath::new(cells.len());
        for c in cells {
            p.push(*c);
        }
        p
    }

    /// Add a cell to the path.
    ///
    /// Return `false` if the cell is already in the path. In that case the path is unchanged.
    pub fn push(&mut self, cell: Coordinate) -> bool {
        if !self.visited.insert(cell) {
            return false;
        }
        self.path.push(cell);
        true
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no cell.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &Vec<Coordinate> {
        &self.path
    }

    /// Return the cells between the given positions.
    pub fn slice(&self, range: Range<usize>) -> &[Coordinate] {
        &self.path[range]
    }

    /// Whether consecutive cells in the path share a side.
    pub fn is_connected(&self) -> bool {
        self.path.windows(2).all(|w| w[0].is_adjacent(&w[1]))
    }

    /// Whether the path visits every cell of a `rows` x `cols` grid exactly once, moving between
    /// adjacent cells only.
    pub fn covers(&self, rows: usize, cols: usize) -> bool {
        self.len() == rows * cols
            && self.path.iter().all(|c| c.in_bounds(rows, cols))
            && self.is_connected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_ignored() {
        let mut p: CoveragePath = CoveragePath::new(4);
        assert!(p.push(Coordinate::new(0, 0)));
        assert!(p.push(Coordinate::new(0, 1)));
        assert!(!p.push(Coordinate::new(0, 0)));
        assert_eq!(p.len(), 2);
        assert_eq!(p.get(), &vec![Coordinate::new(0, 0), Coordinate::new(0, 1)]);
        assert!(p.push(Coordinate::new(1, 1)));
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn from_cells_keeps_first_occurrence() {
        let cells: Vec<Coordinate> = vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(0, 0),
            Coordinate::new(1, 1),
        ];
        let p: CoveragePath = CoveragePath::from_cells(&cells);
        assert_eq!(p.len(), 3);
        assert_eq!(p.get()[2], Coordinate::new(1, 1));
    }

    #[test]
    fn coverage_check() {
        let cells: Vec<Coordinate> = vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 1),
            Coordinate::new(1, 0),
        ];
        assert!(CoveragePath::from_cells(&cells).covers(2, 2));

        // Jump from (0, 1) to (1, 0)
        let broken: Vec<Coordinate> = vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
        ];
        assert!(!CoveragePath::from_cells(&broken).covers(2, 2));
        assert!(!CoveragePath::from_cells(&cells[..3]).covers(2, 2));
    }
}
