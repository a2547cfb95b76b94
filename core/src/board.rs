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

//! The 45-byte board array, its fixed starting layout, and ASCII rendering.

use std::fmt::{self, Display, Formatter};

use crate::cube::CubeSort;
use crate::error::{PijersiError, PijersiResult};
use crate::hexagon::{hex_index, HexIndex, LAYOUT, NUM_HEXES};
use crate::hexstate::HexState;
use crate::player::Player;

/// The 45 hex codes that make up a board, in [`crate::hexagon::HEX_NAMES`]
/// order. Each byte is a [`HexState::encode`] code in `[0, 128)`.
pub type BoardCodes = [u8; NUM_HEXES];

/// An all-empty board.
#[must_use]
pub const fn empty_board() -> BoardCodes {
    [0u8; NUM_HEXES]
}

/// Like [`cube_from_letter`], but reports an unrecognized letter instead of
/// panicking. Used by [`parse_board_token`], which parses untrusted input;
/// the classic starting position below is a trusted constant and keeps
/// using the panicking form.
fn cube_from_letter_checked(letter: char) -> Option<(Player, CubeSort)> {
    let player = if letter.is_ascii_uppercase() {
        Player::White
    } else if letter.is_ascii_lowercase() {
        Player::Black
    } else {
        return None;
    };
    CubeSort::from_code(letter.to_ascii_uppercase()).map(|sort| (player, sort))
}

fn cube_from_letter(letter: char) -> (Player, CubeSort) {
    cube_from_letter_checked(letter).unwrap_or_else(|| panic!("'{letter}' is not a cube letter"))
}

fn set_cube(board: &mut BoardCodes, name: &str, letter: char) {
    let (player, cube) = cube_from_letter(letter);
    let hex = hex_index(name).unwrap_or_else(|| panic!("'{name}' is not a hex name"));
    board[hex as usize] = HexState::single(player, cube).encode();
}

fn set_stack(board: &mut BoardCodes, name: &str, bottom_letter: char, top_letter: char) {
    let (player, bottom) = cube_from_letter(bottom_letter);
    let (top_player, top) = cube_from_letter(top_letter);
    assert_eq!(player, top_player, "a stack cannot mix owners");
    let hex = hex_index(name).unwrap_or_else(|| panic!("'{name}' is not a hex name"));
    board[hex as usize] = HexState::stack(player, bottom, top)
        .expect("classic starting stacks are always Wise-over-Wise")
        .encode();
}

/// The fixed "classic" starting position: two six-cube fighter rows per
/// side plus a double-Wise stack on each side's middle hex.
#[must_use]
pub fn starting_board() -> BoardCodes {
    let mut board = empty_board();

    set_stack(&mut board, "b4", 'W', 'W');
    set_cube(&mut board, "a1", 'R');
    set_cube(&mut board, "a2", 'P');
    set_cube(&mut board, "a3", 'S');
    set_cube(&mut board, "a4", 'R');
    set_cube(&mut board, "a5", 'P');
    set_cube(&mut board, "a6", 'S');
    set_cube(&mut board, "b1", 'P');
    set_cube(&mut board, "b2", 'S');
    set_cube(&mut board, "b3", 'R');
    set_cube(&mut board, "b5", 'S');
    set_cube(&mut board, "b6", 'R');
    set_cube(&mut board, "b7", 'P');

    set_stack(&mut board, "f4", 'w', 'w');
    set_cube(&mut board, "g1", 's');
    set_cube(&mut board, "g2", 'p');
    set_cube(&mut board, "g3", 'r');
    set_cube(&mut board, "g4", 's');
    set_cube(&mut board, "g5", 'p');
    set_cube(&mut board, "g6", 'r');
    set_cube(&mut board, "f1", 'p');
    set_cube(&mut board, "f2", 'r');
    set_cube(&mut board, "f3", 's');
    set_cube(&mut board, "f5", 'r');
    set_cube(&mut board, "f6", 's');
    set_cube(&mut board, "f7", 'p');

    board
}

fn parse_cell(token: &str) -> PijersiResult<u8> {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('.'), None, None) => Ok(HexState::Empty.encode()),

        (Some(c), None, None) => {
            let (player, cube) = cube_from_letter_checked(c).ok_or(PijersiError::InvalidConstruction {
                reason: "a single-cell token must be '.' or a cube letter",
            })?;
            Ok(HexState::single(player, cube).encode())
        }

        (Some(top_c), Some(bottom_c), None) => {
            let (top_player, top) = cube_from_letter_checked(top_c).ok_or(PijersiError::InvalidConstruction {
                reason: "a stack token's first letter must be a cube letter",
            })?;
            let (bottom_player, bottom) =
                cube_from_letter_checked(bottom_c).ok_or(PijersiError::InvalidConstruction {
                    reason: "a stack token's second letter must be a cube letter",
                })?;
            if top_player != bottom_player {
                return Err(PijersiError::InvalidConstruction {
                    reason: "a stack cannot mix owners",
                });
            }
            Ok(HexState::stack(top_player, bottom, top)?.encode())
        }

        _ => Err(PijersiError::InvalidConstruction {
            reason: "a cell token is '.', one cube letter, or two (top then bottom)",
        }),
    }
}

/// Parse a compact, FEN-like board token: [`NUM_HEXES`] comma-separated cell
/// tokens in [`crate::hexagon::HEX_NAMES`] order, followed by whitespace and
/// a side-to-move letter (`w` or `b`). Each cell token is `.` for empty, a
/// single cube letter for a loose cube (uppercase White, lowercase Black, per
/// [`CubeSort::code`]), or two letters — top then bottom — for a stack, e.g.
/// `"...,WW,... w"` for a White Wise stack with White to move.
///
/// This is a diagnostics convenience for `pijersi_cli`, not a stable wire
/// format: [`crate::render`] is the read-only counterpart used for display.
///
/// # Errors
///
/// Returns [`PijersiError::InvalidConstruction`] if the token does not list
/// exactly [`NUM_HEXES`] cells, a cell token is not `.`/one/two cube
/// letters, a stack mixes owners, or the side letter is not `w`/`b`; and
/// propagates [`PijersiError::InvalidConstruction`] from [`HexState::stack`]
/// if a cell violates the Wise-on-top invariant.
pub fn parse_board_token(token: &str) -> PijersiResult<(BoardCodes, Player)> {
    let mut parts = token.split_whitespace();
    let cells = parts.next().ok_or(PijersiError::InvalidConstruction {
        reason: "board token is missing its cell list",
    })?;
    let side = parts.next().ok_or(PijersiError::InvalidConstruction {
        reason: "board token is missing its side-to-move letter",
    })?;
    if parts.next().is_some() {
        return Err(PijersiError::InvalidConstruction {
            reason: "board token has trailing content after the side-to-move letter",
        });
    }

    let cell_tokens: Vec<&str> = cells.split(',').collect();
    if cell_tokens.len() != NUM_HEXES {
        return Err(PijersiError::InvalidConstruction {
            reason: "board token must list exactly 45 comma-separated cells",
        });
    }

    let mut board = empty_board();
    for (hex, &cell) in cell_tokens.iter().enumerate() {
        board[hex] = parse_cell(cell)?;
    }

    let player = match side {
        "w" | "W" => Player::White,
        "b" | "B" => Player::Black,
        _ => {
            return Err(PijersiError::InvalidConstruction {
                reason: "side-to-move letter must be 'w' or 'b'",
            })
        }
    };

    Ok((board, player))
}

fn cube_label(player: Player, cube: CubeSort) -> char {
    let c = cube.code().chars().next().unwrap();
    if player == Player::Black {
        c.to_ascii_lowercase()
    } else {
        c
    }
}

/// Render a board as the two-character-per-hex grid the diagnostics CLI
/// prints: `..` for empty, `.X` for a single cube, `XY` (top over bottom)
/// for a stack.
#[must_use]
pub fn render(board: &BoardCodes) -> String {
    let mut out = String::new();
    let shift = " ".repeat(4);

    for (indented, row) in LAYOUT {
        if *indented {
            out.push_str(&shift);
        }
        for &name in *row {
            let hex = hex_index(name).expect("LAYOUT names are always valid");
            let state = HexState::decode(board[hex as usize] as u16)
                .expect("board codes are always in range");
            out.push_str(name);
            match state {
                HexState::Empty => out.push_str(".."),
                HexState::Single { player, cube } => {
                    out.push('.');
                    out.push(cube_label(player, cube));
                }
                HexState::Stack {
                    player,
                    bottom,
                    top,
                } => {
                    out.push(cube_label(player, top));
                    out.push(cube_label(player, bottom));
                }
            }
            out.push_str(&shift);
        }
        out.push('\n');
    }
    out
}

/// Thin display wrapper so a board can be printed with `{}` directly.
pub struct DisplayBoard<'a>(pub &'a BoardCodes);

impl Display for DisplayBoard<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(self.0))
    }
}
