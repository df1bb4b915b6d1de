/*
coordinate.rs

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

//! Cell coordinates in the puzzle grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a cell in the grid. Rows and columns start at 0.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    /// Create a [`Coordinate`] object.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between the two cells.
    pub fn distance(&self, other: &Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether the two cells share a side. Diagonal cells are not adjacent.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.distance(other) == 1
    }

    /// Whether the cell is inside a grid of the given size.
    pub fn in_bounds(&self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }

    /// Index of the cell in a row-major array of `cols` columns.
    pub fn index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_ignores_diagonals() {
        let c: Coordinate = Coordinate::new(2, 2);
        assert!(c.is_adjacent(&Coordinate::new(1, 2)));
        assert!(c.is_adjacent(&Coordinate::new(2, 3)));
        assert!(!c.is_adjacent(&Coordinate::new(3, 3)));
        assert!(!c.is_adjacent(&c));
        assert!(!c.is_adjacent(&Coordinate::new(2, 4)));
    }

    #[test]
    fn bounds_and_index() {
        let c: Coordinate = Coordinate::new(1, 3);
        assert!(c.in_bounds(2, 4));
        assert!(!c.in_bounds(2, 3));
        assert!(!c.in_bounds(1, 4));
        assert_eq!(c.index(4), 7);
    }
}
