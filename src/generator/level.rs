/*
level.rs

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

//! Generator configuration and generated levels.
//!
//! [`GeneratorConfig`] describes the level to build: grid size, number of wires, and difficulty.
//! [`LevelData`] is what the level generator returns to the game engine: the ports (endpoints) of
//! every wire, and the solution path of every wire. The game engine must not modify the solution;
//! it is used to check that the grid is filled and to replay a wire when the player asks for a
//! hint.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use super::coordinate::Coordinate;
use super::coverage::PathStrategy;
use super::errors::ConfigError;
use super::palette::{PALETTE, WireColor};

/// Level difficulty.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::Expert => write!(f, "Expert"),
        }
    }
}

impl Difficulty {
    /// Default grid rows, grid columns, and number of wires for the difficulty.
    pub fn preset(&self) -> (usize, usize, usize) {
        match self {
            Difficulty::Easy => (5, 5, 3),
            Difficulty::Medium => (7, 7, 5),
            Difficulty::Hard => (9, 9, 7),
            Difficulty::Expert => (12, 12, 10),
        }
    }
}

/// Parameters of the level to generate.
///
/// [`GeneratorConfig::new`] rejects configurations that cannot be rendered. A configuration with
/// too many wires for its grid is accepted: the generator then returns its fallback layout.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GeneratorConfig {
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub wire_count: usize,
    pub difficulty: Difficulty,
}

impl GeneratorConfig {
    /// Create a [`GeneratorConfig`] object.
    ///
    /// # Errors
    ///
    /// The grid must be at least 2x2, and the number of wires must be between 1 and the number
    /// of colors in the palette.
    pub fn new(
        grid_rows: usize,
        grid_cols: usize,
        wire_count: usize,
        difficulty: Difficulty,
    ) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = Self {
            grid_rows,
            grid_cols,
            wire_count,
            difficulty,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a [`GeneratorConfig`] object from the difficulty preset.
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let (grid_rows, grid_cols, wire_count) = difficulty.preset();
        Self {
            grid_rows,
            grid_cols,
            wire_count,
            difficulty,
        }
    }

    /// Verify the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_rows < 2 || self.grid_cols < 2 {
            return Err(ConfigError::GridTooSmall {
                rows: self.grid_rows,
                cols: self.grid_cols,
            });
        }
        if self.wire_count == 0 {
            return Err(ConfigError::NoWires);
        }
        if self.wire_count > PALETTE.len() {
            return Err(ConfigError::TooManyWires {
                requested: self.wire_count,
                max: PALETTE.len(),
            });
        }
        Ok(())
    }

    /// Number of cells in the grid.
    pub fn total_cells(&self) -> usize {
        self.grid_rows * self.grid_cols
    }
}

/// Wire with its solution, as produced by the generator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Wire {
    pub color: WireColor,
    pub start: Coordinate,
    pub end: Coordinate,

    /// Cells from `start` to `end`, both included.
    pub solution_path: Vec<Coordinate>,
}

impl Wire {
    /// Number of cells in the wire.
    pub fn len(&self) -> usize {
        self.solution_path.len()
    }

    /// Whether the wire has no cell.
    pub fn is_empty(&self) -> bool {
        self.solution_path.is_empty()
    }

    /// Return the ports of the wire.
    pub fn ports(&self) -> WirePorts {
        WirePorts {
            color: self.color,
            start: self.start,
            end: self.end,
        }
    }
}

/// Wire endpoints, as shown to the player.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WirePorts {
    pub color: WireColor,
    pub start: Coordinate,
    pub end: Coordinate,
}

/// Generated level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LevelData {
    /// Level number.
    pub id: u32,

    /// Configuration the level was generated for.
    pub config: GeneratorConfig,

    /// Ports of the wires.
    pub wires: Vec<WirePorts>,

    /// Solution path of each wire, in the same order as [`LevelData::wires`].
    pub solution: Vec<Vec<Coordinate>>,

    /// Seed of the generation attempt that produced the level.
    pub seed: u32,

    /// Strategy used to build the covering path. `None` for the fallback layout.
    pub strategy: Option<PathStrategy>,

    /// Whether the level is the fallback layout, which does not fill the whole grid.
    pub fallback: bool,
}

impl LevelData {
    /// Create a [`LevelData`] object from the generated wires.
    pub fn new(
        id: u32,
        config: GeneratorConfig,
        wires: &[Wire],
        seed: u32,
        strategy: Option<PathStrategy>,
    ) -> Self {
        Self {
            id,
            config,
            wires: wires.iter().map(|w| w.ports()).collect(),
            solution: wires.iter().map(|w| w.solution_path.clone()).collect(),
            seed,
            fallback: strategy.is_none(),
            strategy,
        }
    }

    /// Number of cells covered by the solution.
    pub fn total_cells(&self) -> usize {
        self.solution.iter().map(|p| p.len()).sum()
    }

    /// Return the solution path of the given wire, for the hint feature.
    pub fn hint(&self, wire: usize) -> Option<&[Coordinate]> {
        self.solution.get(wire).map(|p| p.as_slice())
    }

    /// Return the index of the wire that goes through the given cell.
    pub fn wire_at(&self, cell: &Coordinate) -> Option<usize> {
        self.solution.iter().position(|p| p.contains(cell))
    }

    /// Return a text representation of the grid.
    ///
    /// Ports are drawn with the uppercase letter of their wire color. With `with_solution`, the
    /// other cells of the wires are drawn with the lowercase letter. Empty cells are drawn with
    /// a dot.
    pub fn ascii(&self, with_solution: bool) -> String {
        let rows: usize = self.config.grid_rows;
        let cols: usize = self.config.grid_cols;
        let mut board: Vec<Vec<char>> = vec![vec!['.'; cols]; rows];

        for (ports, path) in self.wires.iter().zip(self.solution.iter()) {
            let letter: char = ports.color.letter();
            if with_solution {
                for c in path.iter().filter(|c| c.in_bounds(rows, cols)) {
                    board[c.row][c.col] = letter;
                }
            }
            for c in [ports.start, ports.end] {
                if c.in_bounds(rows, cols) {
                    board[c.row][c.col] = letter.to_ascii_uppercase();
                }
            }
        }

        let mut s: String = String::with_capacity(rows * (cols * 2 + 1));
        for line in board {
            let l: Vec<String> = line.iter().map(|c| c.to_string()).collect();
            s.push_str(&l.join(" "));
            s.push('\n');
        }
        s
    }
}
