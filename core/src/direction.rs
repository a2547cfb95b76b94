/*
  Pijersi, a rules engine and move generator for the PIJERSI board game.
  Copyright (C) 2022 The Pijersi Authors (see AUTHORS.md file)

  Pijersi is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Pijersi is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! The six directions of travel on the hex board.

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// One of the six directions a cube or stack can step along the hex grid.
/// The discriminants and the order of [`HexDirection::ALL`] are load-bearing:
/// action enumeration iterates directions in this exact order, and different
/// implementations of this engine must agree on it to produce identical
/// action lists.
pub enum HexDirection {
    Phi090 = 0,
    Phi150 = 1,
    Phi210 = 2,
    Phi270 = 3,
    Phi330 = 4,
    Phi030 = 5,
}

impl HexDirection {
    /// Total number of directions.
    pub const NUM_DIRECTIONS: usize = 6;

    /// All six directions, in the canonical enumeration order.
    pub const ALL: [HexDirection; HexDirection::NUM_DIRECTIONS] = [
        HexDirection::Phi090,
        HexDirection::Phi150,
        HexDirection::Phi210,
        HexDirection::Phi270,
        HexDirection::Phi330,
        HexDirection::Phi030,
    ];

    /// The (Δu, Δv) axial offset of a single step in this direction.
    #[inline(always)]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            HexDirection::Phi090 => (1, 0),
            HexDirection::Phi150 => (1, -1),
            HexDirection::Phi210 => (0, -1),
            HexDirection::Phi270 => (-1, 0),
            HexDirection::Phi330 => (-1, 1),
            HexDirection::Phi030 => (0, 1),
        }
    }
}
