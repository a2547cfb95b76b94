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

//! The 45-hex board: naming, axial coordinates, and the adjacency tables
//! derived from them. Everything here is computed once at compile time —
//! there is no runtime initialization step for the topology.

use crate::direction::HexDirection;
use crate::player::Player;

/// An index into the 45-cell board, `0..45`.
pub type HexIndex = u8;

/// Number of cells on the board.
pub const NUM_HEXES: usize = 45;

/// Sentinel returned by the neighbor tables when a step would leave the
/// board.
pub const NULL_HEX: HexIndex = u8::MAX;

/// Canonical hex names, in index order. This is also alphabetical order,
/// since every row letter is followed by a single digit.
pub const HEX_NAMES: [&str; NUM_HEXES] = [
    "a1", "a2", "a3", "a4", "a5", "a6", "b1", "b2", "b3", "b4", "b5", "b6", "b7", "c1", "c2",
    "c3", "c4", "c5", "c6", "d1", "d2", "d3", "d4", "d5", "d6", "d7", "e1", "e2", "e3", "e4",
    "e5", "e6", "f1", "f2", "f3", "f4", "f5", "f6", "f7", "g1", "g2", "g3", "g4", "g5", "g6",
];

/// Axial (u, v) coordinates, in index order, matching [`HEX_NAMES`].
const HEX_COORDS: [(i8, i8); NUM_HEXES] = [
    (-1, -3), (0, -3), (1, -3), (2, -3), (3, -3), (4, -3), // a1..a6
    (-2, -2), (-1, -2), (0, -2), (1, -2), (2, -2), (3, -2), (4, -2), // b1..b7
    (-2, -1), (-1, -1), (0, -1), (1, -1), (2, -1), (3, -1), // c1..c6
    (-3, 0), (-2, 0), (-1, 0), (0, 0), (1, 0), (2, 0), (3, 0), // d1..d7
    (-3, 1), (-2, 1), (-1, 1), (0, 1), (1, 1), (2, 1), // e1..e6
    (-4, 2), (-3, 2), (-2, 2), (-1, 2), (0, 2), (1, 2), (2, 2), // f1..f7
    (-4, 3), (-3, 3), (-2, 3), (-1, 3), (0, 3), (1, 3), // g1..g6
];

/// Unit (Δu, Δv) offsets, indexed like [`HexDirection::ALL`].
const DIR_DELTAS: [(i8, i8); HexDirection::NUM_DIRECTIONS] = [
    HexDirection::Phi090.delta(),
    HexDirection::Phi150.delta(),
    HexDirection::Phi210.delta(),
    HexDirection::Phi270.delta(),
    HexDirection::Phi330.delta(),
    HexDirection::Phi030.delta(),
];

const fn find_hex(u: i8, v: i8) -> HexIndex {
    let mut i = 0;
    while i < NUM_HEXES {
        if HEX_COORDS[i].0 == u && HEX_COORDS[i].1 == v {
            return i as HexIndex;
        }
        i += 1;
    }
    NULL_HEX
}

const fn build_next(step: i8) -> [[HexIndex; HexDirection::NUM_DIRECTIONS]; NUM_HEXES] {
    let mut table = [[NULL_HEX; HexDirection::NUM_DIRECTIONS]; NUM_HEXES];
    let mut i = 0;
    while i < NUM_HEXES {
        let (u, v) = HEX_COORDS[i];
        let mut d = 0;
        while d < HexDirection::NUM_DIRECTIONS {
            let (du, dv) = DIR_DELTAS[d];
            table[i][d] = find_hex(u + step * du, v + step * dv);
            d += 1;
        }
        i += 1;
    }
    table
}

/// `NEXT_FST[hex][dir]` is the index of the adjacent hex one step away in
/// `dir`, or [`NULL_HEX`] if that step leaves the board.
pub const NEXT_FST: [[HexIndex; HexDirection::NUM_DIRECTIONS]; NUM_HEXES] = build_next(1);

/// `NEXT_SND[hex][dir]` is the index of the hex two steps away in `dir`
/// (independent of whether the first step is on the board), or
/// [`NULL_HEX`].
pub const NEXT_SND: [[HexIndex; HexDirection::NUM_DIRECTIONS]; NUM_HEXES] = build_next(2);

const fn abs_i32(x: i32) -> i32 {
    if x < 0 {
        -x
    } else {
        x
    }
}

const fn hex_distance(a: (i8, i8), b: (i8, i8)) -> u8 {
    let du = a.0 as i32 - b.0 as i32;
    let dv = a.1 as i32 - b.1 as i32;
    let dw = du + dv;
    ((abs_i32(du) + abs_i32(dv) + abs_i32(dw)) / 2) as u8
}

const fn build_distance() -> [[u8; NUM_HEXES]; NUM_HEXES] {
    let mut table = [[0u8; NUM_HEXES]; NUM_HEXES];
    let mut i = 0;
    while i < NUM_HEXES {
        let mut j = 0;
        while j < NUM_HEXES {
            table[i][j] = hex_distance(HEX_COORDS[i], HEX_COORDS[j]);
            j += 1;
        }
        i += 1;
    }
    table
}

/// `DISTANCE[a][b]` is the axial hex distance between cells `a` and `b`.
pub const DISTANCE: [[u8; NUM_HEXES]; NUM_HEXES] = build_distance();

/// The six cells of White's goal row ("g").
pub const WHITE_GOAL: [HexIndex; 6] = [
    find_hex(-4, 3),
    find_hex(-3, 3),
    find_hex(-2, 3),
    find_hex(-1, 3),
    find_hex(0, 3),
    find_hex(1, 3),
];

/// The six cells of Black's goal row ("a").
pub const BLACK_GOAL: [HexIndex; 6] = [
    find_hex(-1, -3),
    find_hex(0, -3),
    find_hex(1, -3),
    find_hex(2, -3),
    find_hex(3, -3),
    find_hex(4, -3),
];

/// The goal row cells for `player`.
#[inline(always)]
#[must_use]
pub const fn goal_indices(player: Player) -> [HexIndex; 6] {
    match player {
        Player::White => WHITE_GOAL,
        Player::Black => BLACK_GOAL,
    }
}

const fn build_distance_to_goal(player_goal: [HexIndex; 6]) -> [u8; NUM_HEXES] {
    let mut table = [0u8; NUM_HEXES];
    let mut hex = 0;
    while hex < NUM_HEXES {
        let mut best = u8::MAX;
        let mut g = 0;
        while g < player_goal.len() {
            let d = DISTANCE[hex][player_goal[g] as usize];
            if d < best {
                best = d;
            }
            g += 1;
        }
        table[hex] = best;
        hex += 1;
    }
    table
}

const DISTANCE_TO_WHITE_GOAL: [u8; NUM_HEXES] = build_distance_to_goal(WHITE_GOAL);
const DISTANCE_TO_BLACK_GOAL: [u8; NUM_HEXES] = build_distance_to_goal(BLACK_GOAL);

/// Minimum hex distance from `hex` to any cell of `player`'s goal row.
#[inline(always)]
#[must_use]
pub const fn distance_to_goal(player: Player, hex: HexIndex) -> u8 {
    match player {
        Player::White => DISTANCE_TO_WHITE_GOAL[hex as usize],
        Player::Black => DISTANCE_TO_BLACK_GOAL[hex as usize],
    }
}

/// The printed board layout: for each row (top to bottom, "g" down to "a"),
/// whether it is indented by half a cell width, and its hex names left to
/// right. Used only for [`crate::board::Board`] rendering.
pub const LAYOUT: [(bool, &[&str]); 7] = [
    (true, &["g1", "g2", "g3", "g4", "g5", "g6"]),
    (false, &["f1", "f2", "f3", "f4", "f5", "f6", "f7"]),
    (true, &["e1", "e2", "e3", "e4", "e5", "e6"]),
    (false, &["d1", "d2", "d3", "d4", "d5", "d6", "d7"]),
    (true, &["c1", "c2", "c3", "c4", "c5", "c6"]),
    (false, &["b1", "b2", "b3", "b4", "b5", "b6", "b7"]),
    (true, &["a1", "a2", "a3", "a4", "a5", "a6"]),
];

/// Look up a hex's index by its canonical name (e.g. `"b4"`).
#[must_use]
pub fn hex_index(name: &str) -> Option<HexIndex> {
    HEX_NAMES.iter().position(|&n| n == name).map(|i| i as HexIndex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_hexes_have_a_name_and_unique_coordinates() {
        assert_eq!(HEX_NAMES.len(), NUM_HEXES);
        let mut seen = std::collections::HashSet::new();
        for &coord in &HEX_COORDS {
            assert!(seen.insert(coord), "duplicate coordinate {coord:?}");
        }
    }

    #[test]
    fn hex_index_round_trips_with_names() {
        for (i, &name) in HEX_NAMES.iter().enumerate() {
            assert_eq!(hex_index(name), Some(i as HexIndex));
        }
        assert_eq!(hex_index("z9"), None);
    }

    #[test]
    fn center_of_board_has_all_six_neighbors() {
        let d4 = hex_index("d4").unwrap();
        for dir in 0..HexDirection::NUM_DIRECTIONS {
            assert_ne!(NEXT_FST[d4 as usize][dir], NULL_HEX);
        }
    }

    #[test]
    fn corner_hex_runs_off_board() {
        let a1 = hex_index("a1").unwrap();
        // a1 is a back-row corner: stepping towards row "a" wise-ward must fail.
        let off_board_steps = (0..HexDirection::NUM_DIRECTIONS)
            .filter(|&d| NEXT_FST[a1 as usize][d] == NULL_HEX)
            .count();
        assert!(off_board_steps > 0);
    }

    #[test]
    fn goal_rows_are_six_cells_each() {
        assert_eq!(WHITE_GOAL.len(), 6);
        assert_eq!(BLACK_GOAL.len(), 6);
        for &h in &WHITE_GOAL {
            assert_eq!(&HEX_NAMES[h as usize][..1], "g");
        }
        for &h in &BLACK_GOAL {
            assert_eq!(&HEX_NAMES[h as usize][..1], "a");
        }
    }

    #[test]
    fn distance_to_own_goal_cell_is_zero() {
        for &h in &WHITE_GOAL {
            assert_eq!(distance_to_goal(Player::White, h), 0);
        }
        for &h in &BLACK_GOAL {
            assert_eq!(distance_to_goal(Player::Black, h), 0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let b4 = hex_index("b4").unwrap();
        let f4 = hex_index("f4").unwrap();
        assert_eq!(
            DISTANCE[b4 as usize][f4 as usize],
            DISTANCE[f4 as usize][b4 as usize]
        );
        assert_eq!(DISTANCE[b4 as usize][b4 as usize], 0);
    }
}
