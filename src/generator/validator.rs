/*
validator.rs

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

//! Verify generated wires before a level is accepted.
//!
//! [`validate`] checks the wires produced by one generation attempt. [`replay`] is a second,
//! independent check on the finished level: it draws every wire the way a player would and
//! verifies that the grid ends up full.

use log::debug;
use std::collections::{HashMap, HashSet};

use super::coordinate::Coordinate;
use super::errors::GenerationFailure;
use super::level::{LevelData, Wire};
use super::palette::WireColor;

/// Verify the wires of a `rows` x `cols` grid.
///
/// The checks run in this order:
///
/// 1. The wires cover every cell, and no cell belongs to two wires.
/// 2. No two wires have the same color.
/// 3. No two wires share a port.
/// 4. Every wire has at least two cells, two distinct ports, and its ports are the extremities of
///    its solution path.
/// 5. All the cells are in the grid.
/// 6. Consecutive cells of a wire are adjacent.
///
/// # Errors
///
/// The function returns the first failed check.
pub fn validate(wires: &[Wire], rows: usize, cols: usize) -> Result<(), GenerationFailure> {
    // Coverage
    let total: usize = wires.iter().map(|w| w.len()).sum();
    let distinct: usize = wires
        .iter()
        .flat_map(|w| w.solution_path.iter())
        .collect::<HashSet<&Coordinate>>()
        .len();
    if distinct != total || distinct != rows * cols {
        return Err(GenerationFailure::IncompleteCoverage {
            expected: rows * cols,
            distinct,
            total,
        });
    }

    // Colors
    let mut colors: HashSet<WireColor> = HashSet::with_capacity(wires.len());
    for w in wires {
        if !colors.insert(w.color) {
            return Err(GenerationFailure::DuplicateColor { color: w.color });
        }
    }

    // Ports. A wire with identical ports is reported by the size check.
    let mut ports: HashMap<Coordinate, usize> = HashMap::with_capacity(wires.len() * 2);
    for (i, w) in wires.iter().enumerate() {
        for cell in [w.start, w.end] {
            match ports.get(&cell).copied() {
                Some(first_wire) if first_wire != i => {
                    return Err(GenerationFailure::DuplicateEndpoint {
                        cell,
                        first_wire,
                        second_wire: i,
                    });
                }
                Some(_) => (),
                None => {
                    ports.insert(cell, i);
                }
            }
        }
    }

    // Wire size
    for (i, w) in wires.iter().enumerate() {
        if w.len() < 2 || w.start == w.end {
            return Err(GenerationFailure::WireTooShort {
                wire: i,
                len: w.len(),
            });
        }
        if w.solution_path.first() != Some(&w.start) || w.solution_path.last() != Some(&w.end) {
            return Err(GenerationFailure::PortMismatch {
                wire: i,
                start: w.start,
                end: w.end,
            });
        }
    }

    // Bounds
    for w in wires {
        if let Some(cell) = w.solution_path.iter().find(|c| !c.in_bounds(rows, cols)) {
            return Err(GenerationFailure::OutOfBounds {
                cell: *cell,
                rows,
                cols,
            });
        }
    }

    // Adjacency
    for (i, w) in wires.iter().enumerate() {
        if let Some(pair) = w
            .solution_path
            .windows(2)
            .find(|pair| !pair[0].is_adjacent(&pair[1]))
        {
            return Err(GenerationFailure::NotAdjacent {
                wire: i,
                from: pair[0],
                to: pair[1],
            });
        }
    }

    debug!("{} wires validated on a {rows}x{cols} grid", wires.len());
    Ok(())
}

/// Draw the solution of every wire on an empty board, as a player would.
///
/// Each wire starts on its start port and moves to an adjacent, empty cell at each step, without
/// entering the port of another wire. It must stop on its end port. When all the wires are drawn,
/// the board must be full.
///
/// # Errors
///
/// The function returns the first move that a player could not make, or
/// [`GenerationFailure::IncompleteCoverage`] if the board is not full at the end.
pub fn replay(level: &LevelData) -> Result<(), GenerationFailure> {
    let rows: usize = level.config.grid_rows;
    let cols: usize = level.config.grid_cols;
    let expected: usize = rows * cols;

    let mut port_owner: HashMap<Coordinate, usize> = HashMap::with_capacity(level.wires.len() * 2);
    for (i, w) in level.wires.iter().enumerate() {
        port_owner.insert(w.start, i);
        port_owner.insert(w.end, i);
    }

    let mut board: Vec<Option<usize>> = vec![None; expected];
    let mut filled: usize = 0;
    let mut moves: usize = 0;

    for (i, (ports, path)) in level.wires.iter().zip(level.solution.iter()).enumerate() {
        if path.first() != Some(&ports.start) {
            return Err(GenerationFailure::PortMismatch {
                wire: i,
                start: ports.start,
                end: ports.end,
            });
        }

        let mut previous: Option<Coordinate> = None;
        for cell in path {
            moves += 1;
            if !cell.in_bounds(rows, cols) {
                return Err(GenerationFailure::OutOfBounds {
                    cell: *cell,
                    rows,
                    cols,
                });
            }
            if let Some(from) = previous
                && !from.is_adjacent(cell)
            {
                return Err(GenerationFailure::NotAdjacent {
                    wire: i,
                    from,
                    to: *cell,
                });
            }
            if let Some(owner) = port_owner.get(cell)
                && *owner != i
            {
                return Err(GenerationFailure::PortCrossed {
                    wire: i,
                    cell: *cell,
                    port_of: *owner,
                });
            }
            let slot: &mut Option<usize> = &mut board[cell.index(cols)];
            if slot.is_some() {
                return Err(GenerationFailure::IncompleteCoverage {
                    expected,
                    distinct: filled,
                    total: moves,
                });
            }
            *slot = Some(i);
            filled += 1;
            previous = Some(*cell);
        }

        if previous != Some(ports.end) {
            return Err(GenerationFailure::PortMismatch {
                wire: i,
                start: ports.start,
                end: ports.end,
            });
        }
    }

    if filled != expected {
        return Err(GenerationFailure::IncompleteCoverage {
            expected,
            distinct: filled,
            total: moves,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::coverage::PathStrategy;
    use crate::generator::level::{Difficulty, GeneratorConfig};

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    fn wire(color: WireColor, cells: &[(usize, usize)]) -> Wire {
        let solution_path: Vec<Coordinate> = cells.iter().map(|(r, k)| c(*r, *k)).collect();
        Wire {
            color,
            start: solution_path[0],
            end: solution_path[solution_path.len() - 1],
            solution_path,
        }
    }

    /// Two rows of a 2x3 grid.
    fn valid_wires() -> Vec<Wire> {
        vec![
            wire(WireColor::Red, &[(0, 0), (0, 1), (0, 2)]),
            wire(WireColor::Blue, &[(1, 2), (1, 1), (1, 0)]),
        ]
    }

    fn level(wires: &[Wire]) -> LevelData {
        let config: GeneratorConfig = GeneratorConfig::new(2, 3, 2, Difficulty::Easy).unwrap();
        LevelData::new(1, config, wires, 0, Some(PathStrategy::Zigzag))
    }

    #[test]
    fn valid_level() {
        assert_eq!(validate(&valid_wires(), 2, 3), Ok(()));
        assert_eq!(replay(&level(&valid_wires())), Ok(()));
    }

    #[test]
    fn missing_cell() {
        let wires: Vec<Wire> = vec![
            wire(WireColor::Red, &[(0, 0), (0, 1), (0, 2)]),
            wire(WireColor::Blue, &[(1, 2), (1, 1)]),
        ];
        assert_eq!(
            validate(&wires, 2, 3),
            Err(GenerationFailure::IncompleteCoverage {
                expected: 6,
                distinct: 5,
                total: 5
            })
        );
        assert!(matches!(
            replay(&level(&wires)),
            Err(GenerationFailure::IncompleteCoverage { distinct: 5, .. })
        ));
    }

    #[test]
    fn shared_cell() {
        let wires: Vec<Wire> = vec![
            wire(WireColor::Red, &[(0, 0), (0, 1), (0, 2), (1, 2)]),
            wire(WireColor::Blue, &[(1, 2), (1, 1), (1, 0)]),
        ];
        assert!(matches!(
            validate(&wires, 2, 3),
            Err(GenerationFailure::IncompleteCoverage { total: 7, .. })
        ));
    }

    #[test]
    fn duplicate_color() {
        let mut wires: Vec<Wire> = valid_wires();
        wires[1].color = WireColor::Red;
        assert_eq!(
            validate(&wires, 2, 3),
            Err(GenerationFailure::DuplicateColor {
                color: WireColor::Red
            })
        );
    }

    #[test]
    fn duplicate_endpoint() {
        let mut wires: Vec<Wire> = valid_wires();
        wires[1].end = c(0, 2);
        assert_eq!(
            validate(&wires, 2, 3),
            Err(GenerationFailure::DuplicateEndpoint {
                cell: c(0, 2),
                first_wire: 0,
                second_wire: 1
            })
        );
    }

    #[test]
    fn wire_too_short() {
        let wires: Vec<Wire> = vec![
            wire(WireColor::Red, &[(0, 0)]),
            wire(WireColor::Blue, &[(0, 1)]),
        ];
        assert_eq!(
            validate(&wires, 1, 2),
            Err(GenerationFailure::WireTooShort { wire: 0, len: 1 })
        );
    }

    #[test]
    fn ports_must_match_the_path() {
        let mut wires: Vec<Wire> = valid_wires();
        wires[0].start = c(0, 1);
        wires[0].end = c(0, 0);
        assert!(matches!(
            validate(&wires, 2, 3),
            Err(GenerationFailure::PortMismatch { wire: 0, .. })
        ));
        assert!(matches!(
            replay(&level(&wires)),
            Err(GenerationFailure::PortMismatch { wire: 0, .. })
        ));
    }

    #[test]
    fn out_of_bounds() {
        let wires: Vec<Wire> = vec![
            wire(WireColor::Red, &[(0, 0), (0, 1), (0, 2), (0, 3)]),
            wire(WireColor::Blue, &[(1, 2), (1, 1)]),
        ];
        assert_eq!(
            validate(&wires, 2, 3),
            Err(GenerationFailure::OutOfBounds {
                cell: c(0, 3),
                rows: 2,
                cols: 3
            })
        );
    }

    #[test]
    fn jump_between_cells() {
        let wires: Vec<Wire> = vec![
            wire(WireColor::Red, &[(0, 0), (0, 2), (0, 1)]),
            wire(WireColor::Blue, &[(1, 2), (1, 1), (1, 0)]),
        ];
        assert_eq!(
            validate(&wires, 2, 3),
            Err(GenerationFailure::NotAdjacent {
                wire: 0,
                from: c(0, 0),
                to: c(0, 2)
            })
        );
        assert!(matches!(
            replay(&level(&wires)),
            Err(GenerationFailure::NotAdjacent { wire: 0, .. })
        ));
    }

    #[test]
    fn replay_rejects_crossing_a_port() {
        // The red wire runs over the blue start port at (1, 2)
        let mut l: LevelData = level(&valid_wires());
        l.solution[0] = vec![c(0, 0), c(0, 1), c(0, 2), c(1, 2)];
        l.wires[0].end = c(1, 2);
        assert_eq!(
            replay(&l),
            Err(GenerationFailure::PortCrossed {
                wire: 0,
                cell: c(1, 2),
                port_of: 1
            })
        );
    }
}
