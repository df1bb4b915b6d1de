/*
partition.rs

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

//! Split a covering path into one segment per wire.

use log::debug;

use super::coordinate::Coordinate;
use super::errors::GenerationFailure;
use super::path::CoveragePath;
use super::random_source::RandomSource;

/// Smallest allowed segment, whatever the grid size.
pub const MIN_SEGMENT_FLOOR: usize = 4;

/// Minimum segment size, relative to the average segment size.
pub const MIN_SEGMENT_RATIO: f64 = 0.5;

/// Maximum segment size, relative to the average segment size.
pub const MAX_SEGMENT_RATIO: f64 = 1.8;

/// Contiguous part of the covering path assigned to one wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Position of the segment along the covering path (0 for the first segment).
    pub index: usize,

    /// Position of the first cell of the segment in the covering path.
    pub offset: usize,

    /// Cells, in path order.
    pub cells: Vec<Coordinate>,
}

impl Segment {
    /// Number of cells in the segment.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the segment has no cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Segment size limits for a path of `path_len` cells split into `wire_count` segments.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SegmentBounds {
    pub min: usize,
    pub max: usize,
}

impl SegmentBounds {
    /// Compute the bounds from the average segment size.
    pub fn new(path_len: usize, wire_count: usize) -> Self {
        let avg: f64 = path_len as f64 / wire_count.max(1) as f64;
        Self {
            min: MIN_SEGMENT_FLOOR.max((avg * MIN_SEGMENT_RATIO).floor() as usize),
            max: (avg * MAX_SEGMENT_RATIO).floor() as usize,
        }
    }
}

/// Split the path into `wire_count` contiguous segments.
///
/// Concatenating the returned segments gives back the path. Every segment has at least
/// [`SegmentBounds::min`] cells. The other segments are drawn randomly so that they do not exceed
/// [`SegmentBounds::max`] cells when the remaining cells allow it; the last segment takes all the
/// remaining cells.
///
/// # Errors
///
/// The function returns [`GenerationFailure::PartitionInfeasible`] if the path is too short for
/// `wire_count` segments of the minimum size.
pub fn partition(
    path: &CoveragePath,
    wire_count: usize,
    rng: &mut RandomSource,
) -> Result<Vec<Segment>, GenerationFailure> {
    let total: usize = path.len();
    let bounds: SegmentBounds = SegmentBounds::new(total, wire_count);

    if wire_count == 0 || bounds.min.checked_mul(wire_count).is_none_or(|n| total < n) {
        return Err(GenerationFailure::PartitionInfeasible {
            path_len: total,
            wire_count,
            min_segment: bounds.min,
        });
    }
    debug!(
        "Partition: {total} cells, {wire_count} wires, segment size {}..{}",
        bounds.min, bounds.max
    );

    let mut segments: Vec<Segment> = Vec::with_capacity(wire_count);
    let mut offset: usize = 0;

    for index in 0..wire_count - 1 {
        let remaining: usize = total - offset;
        let segments_after: usize = wire_count - index - 1;

        // Leave enough cells for the next segments to reach the minimum size, and try not to
        // leave more than they can hold.
        let hi: usize = (remaining - segments_after * bounds.min).min(bounds.max);
        let lo: usize = bounds
            .min
            .max(remaining.saturating_sub(segments_after * bounds.max))
            .min(hi);

        let size: usize = rng.next_int(lo, hi);
        segments.push(Segment {
            index,
            offset,
            cells: path.slice(offset..offset + size).to_vec(),
        });
        offset += size;
    }

    let last: usize = total - offset;
    if last < bounds.min {
        return Err(GenerationFailure::PartitionInfeasible {
            path_len: total,
            wire_count,
            min_segment: bounds.min,
        });
    }
    segments.push(Segment {
        index: wire_count - 1,
        offset,
        cells: path.slice(offset..total).to_vec(),
    });

    debug!(
        "Segment sizes = {:?}",
        segments.iter().map(|s| s.len()).collect::<Vec<usize>>()
    );
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::coverage::zigzag;

    fn grid_path(rows: usize, cols: usize) -> CoveragePath {
        CoveragePath::from_cells(&zigzag(rows, cols))
    }

    #[test]
    fn bounds() {
        assert_eq!(SegmentBounds::new(81, 5), SegmentBounds { min: 8, max: 29 });
        assert_eq!(SegmentBounds::new(4, 1), SegmentBounds { min: 4, max: 7 });
        assert_eq!(SegmentBounds::new(30, 3), SegmentBounds { min: 5, max: 18 });
    }

    #[test]
    fn segments_rebuild_the_path() {
        let path: CoveragePath = grid_path(9, 9);
        for seed in 0..100 {
            let mut rng: RandomSource = RandomSource::new(seed);
            let segments: Vec<Segment> = partition(&path, 5, &mut rng).unwrap();
            assert_eq!(segments.len(), 5);

            let joined: Vec<Coordinate> = segments.iter().flat_map(|s| s.cells.clone()).collect();
            assert_eq!(&joined, path.get());

            let bounds: SegmentBounds = SegmentBounds::new(81, 5);
            for (i, s) in segments.iter().enumerate() {
                assert_eq!(s.index, i);
                assert!(s.len() >= bounds.min);
                assert_eq!(path.get()[s.offset], s.cells[0]);
            }
        }
    }

    #[test]
    fn single_segment_takes_everything() {
        let path: CoveragePath = grid_path(2, 2);
        let mut rng: RandomSource = RandomSource::new(0);
        let segments: Vec<Segment> = partition(&path, 1, &mut rng).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), 4);
    }

    #[test]
    fn too_many_wires_is_an_error() {
        let path: CoveragePath = grid_path(3, 3);
        let mut rng: RandomSource = RandomSource::new(0);
        assert_eq!(
            partition(&path, 3, &mut rng),
            Err(GenerationFailure::PartitionInfeasible {
                path_len: 9,
                wire_count: 3,
                min_segment: 4
            })
        );
        assert!(partition(&path, 0, &mut rng).is_err());
    }

    #[test]
    fn huge_wire_count_is_an_error() {
        let path: CoveragePath = grid_path(5, 5);
        let mut rng: RandomSource = RandomSource::new(0);
        for wire_count in [usize::MAX, 1 << 62, 100] {
            assert!(matches!(
                partition(&path, wire_count, &mut rng),
                Err(GenerationFailure::PartitionInfeasible { path_len: 25, .. })
            ));
        }
    }

    #[test]
    fn tight_partition() {
        // 16 cells, 4 wires of exactly 4 cells
        let path: CoveragePath = grid_path(4, 4);
        let mut rng: RandomSource = RandomSource::new(3);
        let segments: Vec<Segment> = partition(&path, 4, &mut rng).unwrap();
        assert!(segments.iter().all(|s| s.len() == 4));
    }
}
