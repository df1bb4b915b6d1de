/*
generator.rs

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

//! Generate puzzle levels.
//!
//! A level is a grid with pairs of colored ports. The player connects the two ports of each
//! color with a wire, and the wires must fill the whole grid. The generator builds levels that
//! are solvable by construction:
//!
//! * A [`path::CoveragePath`] that visits every cell once is built by one of the
//!   [`coverage::PathStrategy`] strategies (see [`coverage::build_coverage_path`]).
//! * The path is cut into contiguous [`partition::Segment`] objects, one per wire, by
//!   [`partition::partition`].
//! * [`wires::extract_wires`] gives each segment a color and turns its extremities into ports.
//! * [`validator::validate`] and [`validator::replay`] verify the result.
//!
//! [`level_generator::LevelGenerator`] drives these steps with a
//! [`random_source::RandomSource`] seeded from the level number (see [`seed`]), retries on
//! failure, and falls back to a fixed layout when all the attempts fail.
//! Use [`level_generator::generate_level`] to get a [`level::LevelData`] object for a level
//! number, or [`pregenerate::pregenerate`] to build several levels in parallel.

pub mod coordinate;
pub mod coverage;
pub mod errors;
pub mod level;
pub mod level_generator;
pub mod palette;
pub mod partition;
pub mod path;
pub mod pregenerate;
pub mod random_source;
pub mod seed;
pub mod validator;
pub mod wires;
