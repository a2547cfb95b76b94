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

//! Shared data types and the rules engine for PIJERSI: board topology, the
//! bit-packed hex codec, precomputed legality tables, the compound-action
//! enumerator, and game-state bookkeeping. No search, protocol, or I/O lives
//! here — this crate only knows how to tell legal actions from illegal ones.

// Many module elements are re-exported to make names more ergonomic to access.

mod action;
pub use action::Action;

mod board;
pub use board::{empty_board, parse_board_token, render, starting_board, BoardCodes, DisplayBoard};

mod cube;
pub use cube::CubeSort;

mod direction;
pub use direction::HexDirection;

mod error;
pub use error::{PijersiError, PijersiResult};

mod game;
pub use game::{GameState, Reward, UndoInfo, MAX_CREDIT};

mod hexagon;
pub use hexagon::{
    distance_to_goal, goal_indices, hex_index, HexIndex, HEX_NAMES, NULL_HEX, NUM_HEXES,
};

mod hexstate;
pub use hexstate::HexState;

pub mod perft;

mod player;
pub use player::Player;

mod tables;
