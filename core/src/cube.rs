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

//! Cube sorts, which contain no information about ownership or position.

use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
/// The sort of a single cube. The ordering is intentional: Rock, Paper, and
/// Scissors are the "fighters" that can capture, be captured, and count
/// towards goal arrival; Wise is last and does none of that.
pub enum CubeSort {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
    Wise = 3,
}

impl CubeSort {
    /// Total number of cube sorts.
    pub const NUM_SORTS: usize = 4;

    /// All four sorts, in their encoded order.
    pub const ALL: [CubeSort; CubeSort::NUM_SORTS] = [
        CubeSort::Rock,
        CubeSort::Paper,
        CubeSort::Scissors,
        CubeSort::Wise,
    ];

    /// The three sorts that may serve as the top of a stack sitting on a
    /// non-Wise bottom.
    pub const FIGHTERS: [CubeSort; 3] = [CubeSort::Rock, CubeSort::Paper, CubeSort::Scissors];

    /// True for Rock, Paper, and Scissors; false for Wise. Only fighters count
    /// towards goal arrival.
    #[inline(always)]
    pub const fn is_fighter(self) -> bool {
        !matches!(self, CubeSort::Wise)
    }

    /// Whether `self` beats `other` under the rock-paper-scissors relation.
    /// Wise beats nothing and is beaten by nothing.
    #[inline(always)]
    pub const fn beats(self, other: CubeSort) -> bool {
        matches!(
            (self, other),
            (CubeSort::Rock, CubeSort::Scissors)
                | (CubeSort::Scissors, CubeSort::Paper)
                | (CubeSort::Paper, CubeSort::Rock)
        )
    }

    /// The uppercase letter used to name this sort (White's case; Black uses
    /// the lowercase form).
    pub const fn code(self) -> &'static str {
        match self {
            CubeSort::Rock => "R",
            CubeSort::Paper => "P",
            CubeSort::Scissors => "S",
            CubeSort::Wise => "W",
        }
    }

    /// Parse a sort from its uppercase letter.
    pub const fn from_code(c: char) -> Option<CubeSort> {
        match c {
            'R' => Some(CubeSort::Rock),
            'P' => Some(CubeSort::Paper),
            'S' => Some(CubeSort::Scissors),
            'W' => Some(CubeSort::Wise),
            _ => None,
        }
    }
}

impl Display for CubeSort {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}
