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

//! A legal action: the board it produces, the hexes it passed through, and
//! enough bookkeeping to print its canonical name.

use std::fmt;

use crate::hexagon::{HexIndex, HEX_NAMES, NUM_HEXES};

/// `MOVE_CODE_TO_NAMES[move_code]` gives the separator glyph before each hex
/// in the name, indexed by sub-move slot. `move_code` packs two bits: bit 0
/// is the first sub-move's kind (0 = cube move, 1 = stack move), bit 1 is the
/// second's. A `-` separator marks a cube move, `=` a whole-stack move.
const MOVE_CODE_TO_NAMES: [[&str; 2]; 4] =
    [["-", ""], ["=", "-"], ["-", "="], ["=", "-"]];

/// `CAPTURE_CODE_TO_NAMES[capture_code]` gives the `!` suffix for each
/// sub-move that captured, packed the same way as `move_code`.
const CAPTURE_CODE_TO_NAMES: [[&str; 2]; 4] =
    [["", ""], ["!", ""], ["", "!"], ["!", "!"]];

#[derive(Clone, Debug, PartialEq, Eq)]
/// One legal action: a full board after applying it, the 2 or 3 hexes it
/// touched (origin, optional midpoint, destination), and which of the at
/// most two sub-moves captured or moved a whole stack.
pub struct Action {
    pub next_board_codes: [u8; NUM_HEXES],
    pub path_vertices: Vec<HexIndex>,
    pub capture_code: u8,
    pub move_code: u8,
}

impl Action {
    /// Format this action using the engine's canonical notation, e.g.
    /// `b3-c3` for a plain cube move or `b4=c4-d4!` for a stack move that
    /// continues with a capturing cube move.
    #[must_use]
    pub fn name(&self) -> String {
        let hex_names: Vec<&str> = self
            .path_vertices
            .iter()
            .map(|&h| HEX_NAMES[h as usize])
            .collect();
        let move_names = &MOVE_CODE_TO_NAMES[self.move_code as usize];
        let capture_names = &CAPTURE_CODE_TO_NAMES[self.capture_code as usize];

        let mut name = hex_names[0].to_string();
        for i in 0..hex_names.len() - 1 {
            name.push_str(move_names[i]);
            name.push_str(hex_names[i + 1]);
            name.push_str(capture_names[i]);
        }
        name
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
