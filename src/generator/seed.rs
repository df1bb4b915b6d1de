/*
seed.rs

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

//! Seeds for levels and generation attempts.
//!
//! A level number always maps to the same base seed, and each attempt derives its own seed from
//! the base seed and the attempt index. No seed depends on the clock.
//!
//! Both functions multiply by an odd constant, rotate, and XOR with a constant, and then run the
//! MurmurHash3 32-bit finalizer so that consecutive level numbers give unrelated seeds.

/// Constant mixed into the level seeds.
pub const LEVEL_SEED_SALT: u32 = 0x5bd1_e995;

/// Constant mixed into the attempt seeds.
const ATTEMPT_SEED_SALT: u32 = 0x27d4_eb2f;

/// MurmurHash3 32-bit finalizer.
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Return the base seed for the given level number.
pub fn level_seed(level_number: u32) -> u32 {
    let h: u32 = level_number.wrapping_mul(0x9e37_79b1).rotate_left(13) ^ LEVEL_SEED_SALT;
    fmix32(h)
}

/// Return the seed of the given attempt for a level.
pub fn attempt_seed(base_seed: u32, attempt: u32) -> u32 {
    let h: u32 = base_seed ^ attempt.wrapping_add(1).wrapping_mul(0x9e37_79b9).rotate_left(7);
    fmix32(h ^ ATTEMPT_SEED_SALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeds_are_stable() {
        assert_eq!(level_seed(42), level_seed(42));
        assert_eq!(attempt_seed(level_seed(7), 3), attempt_seed(level_seed(7), 3));
    }

    #[test]
    fn level_seeds_do_not_collide() {
        let seeds: HashSet<u32> = (0..10_000).map(level_seed).collect();
        assert_eq!(seeds.len(), 10_000);
    }

    #[test]
    fn attempt_seeds_differ() {
        let base: u32 = level_seed(1);
        let seeds: HashSet<u32> = (0..10).map(|a| attempt_seed(base, a)).collect();
        assert_eq!(seeds.len(), 10);
        assert!(!seeds.contains(&base));
    }

    #[test]
    fn consecutive_levels_are_spread() {
        // Consecutive level numbers should not produce close seeds
        let close: usize = (0..1000u32)
            .filter(|n| level_seed(*n).abs_diff(level_seed(n + 1)) < 1 << 16)
            .count();
        assert!(close < 5, "{close} close seeds");
    }
}
