/*
random_source.rs

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

//! Seeded random numbers for the level generator.
//!
//! Every generation attempt owns its own [`RandomSource`] built from the attempt seed. Nothing in
//! the generator calls [`rand::rng`]: the same seed and the same sequence of calls always give the
//! same values, which makes levels reproducible from their level number.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Deterministic random number generator.
#[derive(Debug, Clone)]
pub struct RandomSource {
    /// Seed the generator was created from. Kept for logging.
    seed: u32,

    inner: Pcg32,
}

impl RandomSource {
    /// Create a [`RandomSource`] object from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        // Spread the seed over the 64 bits of the PCG state
        let seed64: u64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            seed,
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Return the seed used to create the object.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Return a float in the range `[0, 1)`.
    pub fn next_float(&mut self) -> f64 {
        self.inner.random::<f64>()
    }

    /// Return an integer in the range `[min, max]` (both bounds included).
    ///
    /// If `max` is lower than `min`, then `min` is returned.
    pub fn next_int(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.inner.random_range(min..=max)
    }

    /// Return `true` with the given probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_float() < probability
    }

    /// Return a shuffled copy of the given items (Fisher-Yates).
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out: Vec<T> = items.to_vec();
        for i in (1..out.len()).rev() {
            let j: usize = self.next_int(0, i);
            out.swap(i, j);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a: RandomSource = RandomSource::new(1234);
        let mut b: RandomSource = RandomSource::new(1234);
        for _ in 0..50 {
            assert_eq!(a.next_int(0, 1000), b.next_int(0, 1000));
            assert_eq!(a.next_float().to_bits(), b.next_float().to_bits());
        }
        assert_eq!(a.shuffle(&[1, 2, 3, 4, 5, 6]), b.shuffle(&[1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a: RandomSource = RandomSource::new(1);
        let mut b: RandomSource = RandomSource::new(2);
        let va: Vec<usize> = (0..20).map(|_| a.next_int(0, 1_000_000)).collect();
        let vb: Vec<usize> = (0..20).map(|_| b.next_int(0, 1_000_000)).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn ranges_are_respected() {
        let mut rng: RandomSource = RandomSource::new(99);
        for _ in 0..500 {
            let f: f64 = rng.next_float();
            assert!((0.0..1.0).contains(&f));
            let i: usize = rng.next_int(3, 7);
            assert!((3..=7).contains(&i));
        }
        assert_eq!(rng.next_int(5, 5), 5);
        assert_eq!(rng.next_int(8, 2), 8);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng: RandomSource = RandomSource::new(7);
        let items: Vec<usize> = (0..30).collect();
        let mut shuffled: Vec<usize> = rng.shuffle(&items);
        assert_eq!(shuffled.len(), items.len());
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);
        assert!(rng.shuffle::<usize>(&[]).is_empty());
    }
}
