/*
level_generator.rs

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

//! Generate levels.
//!
//! A level is built from a path that visits every cell of the grid. The path is split into one
//! segment per wire, and the extremities of each segment become the ports of the wire. Because
//! the segments cover the grid end to end, the player can always fill the grid by following
//! them.
//!
//! Each generation attempt can fail (see [`GenerationFailure`]). The [`LevelGenerator`] retries
//! with another seed, up to [`MAX_ATTEMPTS`] times, and then returns a fallback layout that is
//! valid by construction.
//!
//! # Examples
//!
//! ```
//! use wirefill::generator::level::{Difficulty, GeneratorConfig};
//! use wirefill::generator::level_generator::generate_level;
//!
//! let config = GeneratorConfig::new(9, 9, 5, Difficulty::Medium).unwrap();
//! let level = generate_level(config, 42);
//! assert_eq!(level.wires.len(), 5);
//! assert_eq!(level.total_cells(), 81);
//! assert_eq!(level, generate_level(config, 42));
//! ```

use log::{Level, debug, info, log_enabled, warn};
use std::time::Instant;

use super::coordinate::Coordinate;
use super::coverage::{self, PathStrategy};
use super::errors::GenerationFailure;
use super::level::{GeneratorConfig, LevelData, Wire};
use super::palette::PALETTE;
use super::partition::{self, Segment};
use super::path::CoveragePath;
use super::random_source::RandomSource;
use super::seed;
use super::validator;
use super::wires;

/// Number of generation attempts before falling back to the default layout.
pub const MAX_ATTEMPTS: u32 = 10;

/// Progress of the level generation.
#[derive(Debug)]
enum AttemptState {
    /// Running the given attempt (starting from 0).
    Attempting(u32),

    /// An attempt produced a valid level.
    Success(LevelData),

    /// All the attempts failed.
    Exhausted,
}

/// Generate a level.
///
/// The result only depends on the configuration and the level number: calling the function
/// twice with the same arguments returns the same level.
pub fn generate_level(config: GeneratorConfig, level_number: u32) -> LevelData {
    LevelGenerator::new(config).generate(level_number)
}

/// [`LevelGenerator`] object.
pub struct LevelGenerator {
    /// Level parameters.
    pub config: GeneratorConfig,

    /// Number of attempts it took to generate the last level.
    pub attempts: u32,

    /// Duration in seconds it took to generate the last level.
    pub duration: f32,

    /// Whether the last level is the fallback layout.
    pub fallback: bool,

    /// Failures of the attempts for the last level.
    pub failures: Vec<GenerationFailure>,

    /// Time when the generation started. Used to compute the [`LevelGenerator::duration`].
    start: Instant,
}

impl LevelGenerator {
    /// Create the object.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            attempts: 0,
            duration: 0.0,
            fallback: false,
            failures: Vec::with_capacity(MAX_ATTEMPTS as usize),
            start: Instant::now(),
        }
    }

    /// Generate the level for the given level number.
    ///
    /// The generator always returns a level. If no attempt succeeds, then the returned level is
    /// the fallback layout (see [`fallback_level`]) and [`LevelData::fallback`] is set.
    pub fn generate(&mut self, level_number: u32) -> LevelData {
        self.attempts = 0;
        self.duration = 0.0;
        self.fallback = false;
        self.failures.clear();
        self.start = Instant::now();

        let base_seed: u32 = seed::level_seed(level_number);
        debug!(
            "Level {level_number}: base seed = {base_seed:#010x}  config = {:?}",
            self.config
        );

        // An invalid configuration goes straight to the fallback layout
        let mut state: AttemptState = match self.config.validate() {
            Ok(()) => AttemptState::Attempting(0),
            Err(e) => {
                warn!("Level {level_number}: invalid configuration: {e}");
                AttemptState::Exhausted
            }
        };
        loop {
            state = match state {
                AttemptState::Attempting(attempt) if attempt >= MAX_ATTEMPTS => {
                    AttemptState::Exhausted
                }
                AttemptState::Attempting(attempt) => {
                    let attempt_seed: u32 = seed::attempt_seed(base_seed, attempt);
                    self.attempts = attempt + 1;
                    match try_generate(&self.config, level_number, attempt_seed) {
                        Ok(level) => AttemptState::Success(level),
                        Err(e) => {
                            debug!(
                                "Level {level_number}: attempt {} (seed {attempt_seed:#010x}) failed: {e}",
                                attempt + 1
                            );
                            self.failures.push(e);
                            AttemptState::Attempting(attempt + 1)
                        }
                    }
                }
                AttemptState::Success(level) => {
                    self.duration = self.start.elapsed().as_secs_f32();
                    debug!(
                        "Level {level_number}: attempts = {}  duration = {}",
                        self.attempts, self.duration
                    );
                    if log_enabled!(Level::Debug) {
                        debug!("Level {level_number}:\n{}", level.ascii(true));
                    }
                    return level;
                }
                AttemptState::Exhausted => {
                    warn!(
                        "Level {level_number}: no valid level after {} attempts, using the fallback layout",
                        self.attempts
                    );
                    self.fallback = true;
                    self.duration = self.start.elapsed().as_secs_f32();
                    return fallback_level(&self.config, level_number, base_seed);
                }
            };
        }
    }
}

/// Run one generation attempt with the given seed.
///
/// # Errors
///
/// The function returns the first failure from the partitioning, the wire extraction, the
/// validation, or the replay of the level.
pub fn try_generate(
    config: &GeneratorConfig,
    level_number: u32,
    seed: u32,
) -> Result<LevelData, GenerationFailure> {
    let rows: usize = config.grid_rows;
    let cols: usize = config.grid_cols;
    let mut rng: RandomSource = RandomSource::new(seed);

    let (strategy, path): (PathStrategy, CoveragePath) =
        coverage::build_coverage_path(rows, cols, &mut rng);
    let segments: Vec<Segment> = partition::partition(&path, config.wire_count, &mut rng)?;
    let wires: Vec<Wire> = wires::extract_wires(&segments, &mut rng)?;
    validator::validate(&wires, rows, cols)?;

    let level: LevelData = LevelData::new(level_number, *config, &wires, seed, Some(strategy));
    validator::replay(&level)?;
    info!(
        "Level {level_number}: {} wires on {rows}x{cols} ({strategy}, seed {:#010x})",
        wires.len(),
        rng.seed()
    );
    Ok(level)
}

/// Return the fallback layout: one straight wire per row, from the first to the last column.
///
/// There are as many wires as requested, but no more than the number of rows (or colors). The
/// rows without wire stay empty, so the layout does not fill the grid. A grid with fewer than two
/// columns cannot hold a wire, and gets none.
pub fn fallback_level(config: &GeneratorConfig, level_number: u32, seed: u32) -> LevelData {
    let rows: usize = config.grid_rows;
    let cols: usize = config.grid_cols;
    let count: usize = if cols < 2 {
        0
    } else {
        config.wire_count.min(rows).min(PALETTE.len())
    };

    let wires: Vec<Wire> = PALETTE
        .iter()
        .take(count)
        .enumerate()
        .map(|(row, color)| Wire {
            color: *color,
            start: Coordinate::new(row, 0),
            end: Coordinate::new(row, cols - 1),
            solution_path: (0..cols).map(|col| Coordinate::new(row, col)).collect(),
        })
        .collect();
    LevelData::new(level_number, *config, &wires, seed, None)
}
