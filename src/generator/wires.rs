/*
wires.rs

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

//! Turn path segments into colored wires.

use log::debug;

use super::coordinate::Coordinate;
use super::errors::GenerationFailure;
use super::level::Wire;
use super::palette::{PALETTE, WireColor};
use super::partition::Segment;
use super::random_source::RandomSource;

/// Probability that the ports of a wire are swapped.
///
/// Swapping only changes which port is reported as the start; the wire covers the same cells.
pub const FLIP_PROBABILITY: f64 = 0.25;

/// Build one wire per segment.
///
/// The wires are returned in path order, following [`Segment::index`]. The ports of a wire are
/// always the first and last cells of its segment: the player draws wires from cell to adjacent
/// cell, so a port in the middle of the segment would leave part of the segment unreachable.
///
/// # Errors
///
/// The function returns [`GenerationFailure::PaletteExhausted`] if there are more segments than
/// colors.
pub fn extract_wires(
    segments: &[Segment],
    rng: &mut RandomSource,
) -> Result<Vec<Wire>, GenerationFailure> {
    if segments.len() > PALETTE.len() {
        return Err(GenerationFailure::PaletteExhausted {
            requested: segments.len(),
            available: PALETTE.len(),
        });
    }

    // Draw the colors without replacement, and then shuffle the drawn colors
    let drawn: Vec<WireColor> = rng.shuffle(&PALETTE)[..segments.len()].to_vec();
    let colors: Vec<WireColor> = rng.shuffle(&drawn);

    let mut ordered: Vec<&Segment> = segments.iter().collect();
    ordered.sort_by_key(|s| s.index);

    let mut wires: Vec<Wire> = Vec::with_capacity(segments.len());
    for (segment, color) in ordered.into_iter().zip(colors) {
        let mut solution_path: Vec<Coordinate> = segment.cells.clone();
        if rng.chance(FLIP_PROBABILITY) {
            debug!("Wire {} ({color}): ports swapped", segment.index);
            solution_path.reverse();
        }
        let (Some(start), Some(end)) = (solution_path.first(), solution_path.last()) else {
            return Err(GenerationFailure::WireTooShort {
                wire: segment.index,
                len: 0,
            });
        };
        wires.push(Wire {
            color,
            start: *start,
            end: *end,
            solution_path,
        });
    }
    Ok(wires)
}
