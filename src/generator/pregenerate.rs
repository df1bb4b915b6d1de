/*
pregenerate.rs

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

//! Generate upcoming levels in advance.
//!
//! While the player solves a level, the next levels can be generated in the background. Each
//! level is generated by its own [`LevelGenerator`](super::level_generator::LevelGenerator) with
//! its own random source, so running them in parallel gives the same levels as running them one
//! after the other.

use log::debug;
use rayon::prelude::*;

use super::level::{GeneratorConfig, LevelData};
use super::level_generator::generate_level;

/// Generate `count` consecutive levels, starting at `first_level`.
///
/// The levels are returned in level number order.
pub fn pregenerate(config: GeneratorConfig, first_level: u32, count: u32) -> Vec<LevelData> {
    let last_level: u32 = first_level.saturating_add(count);
    debug!("Pre-generating levels {first_level}..{last_level}");
    (first_level..last_level)
        .into_par_iter()
        .map(|level_number| generate_level(config, level_number))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::level::Difficulty;

    #[test]
    fn parallel_matches_sequential() {
        let config: GeneratorConfig = GeneratorConfig::from_difficulty(Difficulty::Hard);
        let parallel: Vec<LevelData> = pregenerate(config, 100, 12);
        let sequential: Vec<LevelData> = (100..112).map(|n| generate_level(config, n)).collect();
        assert_eq!(parallel, sequential);
        assert_eq!(parallel[0].id, 100);
        assert_eq!(parallel[11].id, 111);
    }

    #[test]
    fn no_levels() {
        let config: GeneratorConfig = GeneratorConfig::from_difficulty(Difficulty::Easy);
        assert!(pregenerate(config, 1, 0).is_empty());
    }
}
