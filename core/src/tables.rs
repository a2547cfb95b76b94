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

//! Precomputed legality tables for the three kinds of sub-move, plus a
//! handful of per-code property tables used to find action sources without
//! scanning a `HexState`. Every table here is keyed purely by hex codes, so
//! it is built once from [`HexState::iter_legal`] and never touched again.
//!
//! The two-hex tables ([`CUBE_PATH1`], [`STACK_PATH1`]) are indexed by a
//! [`encode_path2`] code and answer "what does the board look like after
//! this sub-move, and was it a capture?" for an adjacent pair of cells.
//! [`STACK_PATH2`] answers the same question for a stack's two-hex leap, but
//! is keyed by the same two-hex (source, destination) code: a leap is only
//! ever attempted when the caller has already confirmed the intermediate
//! cell is empty, which also means the intermediate always ends up empty
//! again in the result.

use once_cell::sync::Lazy;

use crate::cube::CubeSort;
use crate::hexstate::{decode_path2, encode_path2, encode_path3, CODE_BASE_2, HexState};
use crate::player::Player;

/// Sentinel meaning "no legal sub-move produces this code", mirroring
/// [`crate::hexagon::NULL_HEX`].
pub const NULL_PATH2: u16 = 0;
/// Same sentinel, for the three-hex tables.
pub const NULL_PATH3: u32 = 0;

/// The outcome of looking up a two-hex sub-move: the resulting path code, and
/// whether the move captured an enemy cube. A `next_code` of
/// [`NULL_PATH2`] means the sub-move is illegal; `HexState::Empty` on both
/// ends of a path never legitimately re-encodes to 0, since code 0 only
/// arises when both hexes are empty, and a sub-move with an empty source is
/// always illegal.
#[derive(Copy, Clone, Debug, Default)]
pub struct PathEntry2 {
    pub next_code: u16,
    pub is_capture: bool,
}

/// The three-hex equivalent of [`PathEntry2`], produced by [`STACK_PATH2`].
#[derive(Copy, Clone, Debug, Default)]
pub struct PathEntry3 {
    pub next_code: u32,
    pub is_capture: bool,
}

fn try_cube_path1(src: HexState, dst: HexState) -> Option<(HexState, HexState, bool)> {
    let (player, acting, rest) = match src {
        HexState::Empty => return None,
        HexState::Single { player, cube } => (player, cube, HexState::Empty),
        HexState::Stack {
            player,
            bottom,
            top,
        } => (player, top, HexState::single(player, bottom)),
    };

    match dst {
        HexState::Empty => Some((rest, HexState::single(player, acting), false)),

        HexState::Single {
            player: dst_player,
            cube: dst_bottom,
        } if dst_player == player => {
            if matches!(acting, CubeSort::Wise) && !matches!(dst_bottom, CubeSort::Wise) {
                None
            } else {
                HexState::stack(player, dst_bottom, acting)
                    .ok()
                    .map(|stacked| (rest, stacked, false))
            }
        }

        HexState::Stack { player: dst_player, .. } if dst_player == player => None,

        HexState::Single { cube: dst_cube, .. } => acting
            .beats(dst_cube)
            .then(|| (rest, HexState::single(player, acting), true)),

        HexState::Stack { top: dst_top, .. } => acting
            .beats(dst_top)
            .then(|| (rest, HexState::single(player, acting), true)),
    }
}

fn try_stack_move(src: HexState, dst: HexState) -> Option<(HexState, HexState, bool)> {
    let (player, bottom, top) = match src {
        HexState::Stack {
            player,
            bottom,
            top,
        } => (player, bottom, top),
        _ => return None,
    };
    let moved = HexState::Stack {
        player,
        bottom,
        top,
    };

    match dst {
        HexState::Empty => Some((HexState::Empty, moved, false)),

        HexState::Single { player: dst_player, .. } | HexState::Stack { player: dst_player, .. }
            if dst_player == player =>
        {
            None
        }

        HexState::Single { cube: dst_cube, .. } => {
            top.beats(dst_cube).then(|| (HexState::Empty, moved, true))
        }

        HexState::Stack { top: dst_top, .. } => {
            top.beats(dst_top).then(|| (HexState::Empty, moved, true))
        }
    }
}

fn build_cube_path1() -> Vec<PathEntry2> {
    let mut table = vec![PathEntry2::default(); CODE_BASE_2 as usize];
    for src in HexState::iter_legal() {
        for dst in HexState::iter_legal() {
            let code = encode_path2([src.encode(), dst.encode()]);
            if let Some((next_src, next_dst, is_capture)) = try_cube_path1(src, dst) {
                table[code as usize] = PathEntry2 {
                    next_code: encode_path2([next_src.encode(), next_dst.encode()]),
                    is_capture,
                };
            }
        }
    }
    table
}

fn build_stack_path1() -> Vec<PathEntry2> {
    let mut table = vec![PathEntry2::default(); CODE_BASE_2 as usize];
    for src in HexState::iter_legal() {
        for dst in HexState::iter_legal() {
            let code = encode_path2([src.encode(), dst.encode()]);
            if let Some((next_src, next_dst, is_capture)) = try_stack_move(src, dst) {
                table[code as usize] = PathEntry2 {
                    next_code: encode_path2([next_src.encode(), next_dst.encode()]),
                    is_capture,
                };
            }
        }
    }
    table
}

fn build_stack_path2() -> Vec<PathEntry3> {
    let mut table = vec![PathEntry3::default(); CODE_BASE_2 as usize];
    for src in HexState::iter_legal() {
        for dst in HexState::iter_legal() {
            let code = encode_path2([src.encode(), dst.encode()]);
            if let Some((next_src, next_dst, is_capture)) = try_stack_move(src, dst) {
                table[code as usize] = PathEntry3 {
                    next_code: encode_path3([next_src.encode(), HexState::Empty.encode(), next_dst.encode()]),
                    is_capture,
                };
            }
        }
    }
    table
}

/// Try a single-cube (or stack-peeling) sub-move from `src` to an adjacent
/// `dst`, where both are given as packed codes.
pub fn try_cube_path1_codes(code: u16) -> Option<PathEntry2> {
    let entry = CUBE_PATH1[code as usize];
    (entry.next_code != NULL_PATH2).then_some(entry)
}

/// Try moving a whole stack one hex from `src` to an adjacent `dst`.
pub fn try_stack_path1_codes(code: u16) -> Option<PathEntry2> {
    let entry = STACK_PATH1[code as usize];
    (entry.next_code != NULL_PATH2).then_some(entry)
}

/// Try leaping a whole stack two hexes from `src` to `dst`, given the
/// intermediate hex is already confirmed empty by the caller.
pub fn try_stack_path2_codes(code: u16) -> Option<PathEntry3> {
    let entry = STACK_PATH2[code as usize];
    (entry.next_code != NULL_PATH3).then_some(entry)
}

static CUBE_PATH1: Lazy<Vec<PathEntry2>> = Lazy::new(|| {
    log::debug!("building cube_path1 table ({} entries)", CODE_BASE_2);
    build_cube_path1()
});

static STACK_PATH1: Lazy<Vec<PathEntry2>> = Lazy::new(|| {
    log::debug!("building stack_path1 table ({} entries)", CODE_BASE_2);
    build_stack_path1()
});

static STACK_PATH2: Lazy<Vec<PathEntry3>> = Lazy::new(|| {
    log::debug!("building stack_path2 table ({} entries)", CODE_BASE_2);
    build_stack_path2()
});

fn build_property_table(f: impl Fn(HexState) -> u8) -> [[u8; 128]; Player::NUM_PLAYERS] {
    let mut table = [[0u8; 128]; Player::NUM_PLAYERS];
    for state in HexState::iter_legal() {
        if let HexState::Single { player, .. } | HexState::Stack { player, .. } = state {
            table[player as usize][state.encode() as usize] = f(state);
        }
    }
    table
}

/// `HAS_CUBE[player][code]` is 1 iff `code` decodes to a non-empty hex owned
/// by `player`.
pub static HAS_CUBE: Lazy<[[u8; 128]; Player::NUM_PLAYERS]> =
    Lazy::new(|| build_property_table(|_| 1));

/// `HAS_STACK[player][code]` is 1 iff `code` decodes to a stack owned by
/// `player`.
pub static HAS_STACK: Lazy<[[u8; 128]; Player::NUM_PLAYERS]> = Lazy::new(|| {
    build_property_table(|state| matches!(state, HexState::Stack { .. }) as u8)
});

/// `CUBE_COUNT[player][code]` is the number of cubes (1 or 2) a `player`-owned
/// code carries.
pub static CUBE_COUNT: Lazy<[[u8; 128]; Player::NUM_PLAYERS]> = Lazy::new(|| {
    build_property_table(|state| match state {
        HexState::Stack { .. } => 2,
        _ => 1,
    })
});

/// `HAS_FIGHTER[player][code]` is 1 iff at least one of the code's cubes is a
/// fighter (Rock, Paper or Scissors).
pub static HAS_FIGHTER: Lazy<[[u8; 128]; Player::NUM_PLAYERS]> = Lazy::new(|| {
    build_property_table(|state| match state {
        HexState::Stack { bottom, top, .. } => {
            (bottom.is_fighter() || top.is_fighter()) as u8
        }
        HexState::Single { cube, .. } => cube.is_fighter() as u8,
        HexState::Empty => 0,
    })
});

/// `FIGHTER_COUNT[player][code]` counts how many of the code's cubes are
/// fighters (0, 1 or 2).
pub static FIGHTER_COUNT: Lazy<[[u8; 128]; Player::NUM_PLAYERS]> = Lazy::new(|| {
    build_property_table(|state| match state {
        HexState::Stack { bottom, top, .. } => bottom.is_fighter() as u8 + top.is_fighter() as u8,
        HexState::Single { cube, .. } => cube.is_fighter() as u8,
        HexState::Empty => 0,
    })
});
