/*
palette.rs

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

//! Wire colors.
//!
//! Each wire of a level gets its own color. The number of colors limits the number of wires in a
//! level (see [`PALETTE`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Wire color.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    FromRepr,
)]
#[repr(u8)]
pub enum WireColor {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Cyan,
    Pink,
    Lime,
    Teal,
    Brown,
    Navy,
    Maroon,
    Olive,
    White,
    Gray,
}

/// All the colors, in declaration order.
pub const PALETTE: [WireColor; 16] = [
    WireColor::Red,
    WireColor::Blue,
    WireColor::Green,
    WireColor::Yellow,
    WireColor::Orange,
    WireColor::Purple,
    WireColor::Cyan,
    WireColor::Pink,
    WireColor::Lime,
    WireColor::Teal,
    WireColor::Brown,
    WireColor::Navy,
    WireColor::Maroon,
    WireColor::Olive,
    WireColor::White,
    WireColor::Gray,
];

impl WireColor {
    /// Color components, between 0 and 255, for the wire and its ports.
    pub fn rgba(&self) -> (u8, u8, u8, u8) {
        match self {
            WireColor::Red => (230, 25, 75, 255),
            WireColor::Blue => (0, 130, 200, 255),
            WireColor::Green => (60, 180, 75, 255),
            WireColor::Yellow => (255, 225, 25, 255),
            WireColor::Orange => (245, 130, 48, 255),
            WireColor::Purple => (145, 30, 180, 255),
            WireColor::Cyan => (70, 240, 240, 255),
            WireColor::Pink => (240, 50, 230, 255),
            WireColor::Lime => (210, 245, 60, 255),
            WireColor::Teal => (0, 128, 128, 255),
            WireColor::Brown => (170, 110, 40, 255),
            WireColor::Navy => (0, 0, 128, 255),
            WireColor::Maroon => (128, 0, 0, 255),
            WireColor::Olive => (128, 128, 0, 255),
            WireColor::White => (250, 250, 250, 255),
            WireColor::Gray => (128, 128, 128, 255),
        }
    }

    /// Letter used to draw the wire in text mode.
    ///
    /// Letters are unique across the palette.
    pub fn letter(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl fmt::Display for WireColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn palette_matches_repr() {
        for (i, c) in PALETTE.iter().enumerate() {
            assert_eq!(WireColor::from_repr(i as u8), Some(*c));
        }
        assert_eq!(WireColor::from_repr(PALETTE.len() as u8), None);
    }

    #[test]
    fn letters_and_components_are_unique() {
        let letters: HashSet<char> = PALETTE.iter().map(|c| c.letter()).collect();
        assert_eq!(letters.len(), PALETTE.len());
        let rgba: HashSet<(u8, u8, u8, u8)> = PALETTE.iter().map(|c| c.rgba()).collect();
        assert_eq!(rgba.len(), PALETTE.len());
    }
}
