/*
errors.rs

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

//! Errors raised while generating a level.
//!
//! All the [`GenerationFailure`] variants are recoverable: the level generator logs them and
//! retries with another seed (see [`crate::generator::level_generator`]).

use thiserror::Error;

use super::coordinate::Coordinate;
use super::palette::WireColor;

/// Reason why a generation attempt failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    /// The wires do not cover the grid, or some cells belong to several wires.
    #[error("incomplete coverage: expected {expected} cells, got {distinct} distinct cells out of {total}")]
    IncompleteCoverage {
        expected: usize,
        distinct: usize,
        total: usize,
    },

    /// The path is too short to give every wire its minimum length.
    #[error(
        "cannot split {path_len} cells into {wire_count} wires of at least {min_segment} cells"
    )]
    PartitionInfeasible {
        path_len: usize,
        wire_count: usize,
        min_segment: usize,
    },

    /// Two wires have the same color.
    #[error("color {color} is used by several wires")]
    DuplicateColor { color: WireColor },

    /// Two wires share an endpoint.
    #[error("cell {cell} is an endpoint of wires {first_wire} and {second_wire}")]
    DuplicateEndpoint {
        cell: Coordinate,
        first_wire: usize,
        second_wire: usize,
    },

    /// A wire has fewer than two cells, or starts and ends on the same cell.
    #[error("wire {wire} is too short ({len} cells)")]
    WireTooShort { wire: usize, len: usize },

    /// A cell is outside the grid.
    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        cell: Coordinate,
        rows: usize,
        cols: usize,
    },

    /// Two consecutive cells of a wire do not share a side.
    #[error("wire {wire} jumps from {from} to {to}")]
    NotAdjacent {
        wire: usize,
        from: Coordinate,
        to: Coordinate,
    },

    /// The ports of a wire are not the extremities of its solution path.
    #[error("wire {wire} ports {start} and {end} do not match its solution path")]
    PortMismatch {
        wire: usize,
        start: Coordinate,
        end: Coordinate,
    },

    /// The solution path of a wire goes through the port of another wire.
    #[error("wire {wire} goes through {cell}, which is a port of wire {port_of}")]
    PortCrossed {
        wire: usize,
        cell: Coordinate,
        port_of: usize,
    },

    /// There are more wires than colors.
    #[error("{requested} wires requested but only {available} colors are available")]
    PaletteExhausted { requested: usize, available: usize },
}

/// Invalid generator configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the grid must be at least 2x2 (got {rows}x{cols})")]
    GridTooSmall { rows: usize, cols: usize },

    #[error("a level needs at least one wire")]
    NoWires,

    #[error("{requested} wires requested, the maximum is {max}")]
    TooManyWires { requested: usize, max: usize },
}
