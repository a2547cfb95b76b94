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

//! `GameState`: board codes plus turn bookkeeping, the compound-action
//! enumerator, and terminal/reward detection. This is the hot path of the
//! engine — everything here reads precomputed tables from [`crate::tables`]
//! rather than branching on cube sorts directly.

use std::fmt::{self, Display, Formatter};

use crate::action::Action;
use crate::board::{starting_board, BoardCodes, DisplayBoard};
use crate::direction::HexDirection;
use crate::hexagon::{distance_to_goal, goal_indices, HexIndex, NEXT_FST, NEXT_SND, NULL_HEX, NUM_HEXES};
use crate::hexstate::{decode_path2, decode_path3, encode_path2};
use crate::player::Player;
use crate::tables;

/// The credit counter resets to this value whenever an action captures or
/// changes either player's stack count; it starts a game here too.
pub const MAX_CREDIT: u8 = 20;

#[repr(i8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// The outcome credited to one player once a game has ended.
pub enum Reward {
    Loss = -1,
    Draw = 0,
    Win = 1,
}

fn cube_sources(board: &BoardCodes, player: Player) -> impl Iterator<Item = HexIndex> + '_ {
    let has_cube = &tables::HAS_CUBE[player as usize];
    (0..NUM_HEXES as HexIndex).filter(move |&h| has_cube[board[h as usize] as usize] != 0)
}

fn stack_sources(board: &BoardCodes, player: Player) -> impl Iterator<Item = HexIndex> + '_ {
    let has_stack = &tables::HAS_STACK[player as usize];
    (0..NUM_HEXES as HexIndex).filter(move |&h| has_stack[board[h as usize] as usize] != 0)
}

/// Try a single-cube (or stack-peeling) sub-move one hex in `dir`.
fn try_cube_path1_action(board: &BoardCodes, source: HexIndex, dir: HexDirection) -> Option<Action> {
    let dst = NEXT_FST[source as usize][dir as usize];
    if dst == NULL_HEX {
        return None;
    }
    let code = encode_path2([board[source as usize], board[dst as usize]]);
    let entry = tables::try_cube_path1_codes(code)?;
    let [c0, c1] = decode_path2(entry.next_code);
    let mut next_board = *board;
    next_board[source as usize] = c0;
    next_board[dst as usize] = c1;
    Some(Action {
        next_board_codes: next_board,
        path_vertices: vec![source, dst],
        capture_code: u8::from(entry.is_capture),
        move_code: 0,
    })
}

/// Try moving a whole stack one hex in `dir`.
fn try_stack_path1_action(board: &BoardCodes, source: HexIndex, dir: HexDirection) -> Option<Action> {
    let dst = NEXT_FST[source as usize][dir as usize];
    if dst == NULL_HEX {
        return None;
    }
    let code = encode_path2([board[source as usize], board[dst as usize]]);
    let entry = tables::try_stack_path1_codes(code)?;
    let [c0, c1] = decode_path2(entry.next_code);
    let mut next_board = *board;
    next_board[source as usize] = c0;
    next_board[dst as usize] = c1;
    Some(Action {
        next_board_codes: next_board,
        path_vertices: vec![source, dst],
        capture_code: u8::from(entry.is_capture),
        move_code: 1,
    })
}

/// Try leaping a whole stack two hexes in `dir`. The intermediate hex must be
/// empty — the leap table is keyed only by (source, destination) and trusts
/// the caller to have checked this, so it is checked here before any lookup.
fn try_stack_path2_action(board: &BoardCodes, source: HexIndex, dir: HexDirection) -> Option<Action> {
    let mid = NEXT_FST[source as usize][dir as usize];
    if mid == NULL_HEX || board[mid as usize] != 0 {
        return None;
    }
    let dst = NEXT_SND[source as usize][dir as usize];
    if dst == NULL_HEX {
        return None;
    }
    let code = encode_path2([board[source as usize], board[dst as usize]]);
    let entry = tables::try_stack_path2_codes(code)?;
    let path3 = decode_path3(entry.next_code);
    let mut next_board = *board;
    next_board[source as usize] = path3[0];
    next_board[mid as usize] = path3[1];
    next_board[dst as usize] = path3[2];
    Some(Action {
        next_board_codes: next_board,
        path_vertices: vec![source, dst],
        capture_code: u8::from(entry.is_capture),
        move_code: 1,
    })
}

/// Cube-move first, optionally continued by a stack-move of the landed-on
/// stack. See the module-level enumeration order contract.
fn cube_first_actions(board: &BoardCodes, player: Player) -> Vec<Action> {
    let mut actions = Vec::new();
    for source in cube_sources(board, player) {
        for dir in HexDirection::ALL {
            let Some(action1) = try_cube_path1_action(board, source, dir) else {
                continue;
            };
            let stack_source = action1.path_vertices[1];
            let board1 = action1.next_board_codes;
            let base_vertices = action1.path_vertices.clone();
            let base_capture = action1.capture_code;
            let base_move = action1.move_code;
            actions.push(action1);

            let landed_on_own_stack =
                tables::HAS_STACK[player as usize][board1[stack_source as usize] as usize] != 0;
            if !landed_on_own_stack {
                continue;
            }

            for dir2 in HexDirection::ALL {
                if let Some(action21) = try_stack_path1_action(&board1, stack_source, dir2) {
                    let mut vertices = base_vertices.clone();
                    vertices.push(action21.path_vertices[1]);
                    actions.push(Action {
                        next_board_codes: action21.next_board_codes,
                        path_vertices: vertices,
                        capture_code: base_capture | (action21.capture_code << 1),
                        move_code: base_move | (action21.move_code << 1),
                    });
                }
                if let Some(action22) = try_stack_path2_action(&board1, stack_source, dir2) {
                    let mut vertices = base_vertices.clone();
                    vertices.push(action22.path_vertices[1]);
                    actions.push(Action {
                        next_board_codes: action22.next_board_codes,
                        path_vertices: vertices,
                        capture_code: base_capture | (action22.capture_code << 1),
                        move_code: base_move | (action22.move_code << 1),
                    });
                }
            }
        }
    }
    actions
}

/// Stack-move first (one step or a two-hex leap), optionally continued by a
/// cube-move from the hex the stack landed on.
fn stack_first_actions(board: &BoardCodes, player: Player) -> Vec<Action> {
    let mut actions = Vec::new();
    for source in stack_sources(board, player) {
        for dir in HexDirection::ALL {
            if let Some(action11) = try_stack_path1_action(board, source, dir) {
                let cube_source = action11.path_vertices[1];
                let board11 = action11.next_board_codes;
                let base_vertices = action11.path_vertices.clone();
                let base_capture = action11.capture_code;
                let base_move = action11.move_code;
                actions.push(action11);

                for dir2 in HexDirection::ALL {
                    if let Some(action12) = try_cube_path1_action(&board11, cube_source, dir2) {
                        let mut vertices = base_vertices.clone();
                        vertices.push(action12.path_vertices[1]);
                        actions.push(Action {
                            next_board_codes: action12.next_board_codes,
                            path_vertices: vertices,
                            capture_code: base_capture | (action12.capture_code << 1),
                            move_code: base_move | (action12.move_code << 1),
                        });
                    }
                }
            }

            if let Some(action21) = try_stack_path2_action(board, source, dir) {
                let cube_source = action21.path_vertices[1];
                let board21 = action21.next_board_codes;
                let base_vertices = action21.path_vertices.clone();
                let base_capture = action21.capture_code;
                let base_move = action21.move_code;
                actions.push(action21);

                for dir2 in HexDirection::ALL {
                    if let Some(action22) = try_cube_path1_action(&board21, cube_source, dir2) {
                        let mut vertices = base_vertices.clone();
                        vertices.push(action22.path_vertices[1]);
                        actions.push(Action {
                            next_board_codes: action22.next_board_codes,
                            path_vertices: vertices,
                            capture_code: base_capture | (action22.capture_code << 1),
                            move_code: base_move | (action22.move_code << 1),
                        });
                    }
                }
            }
        }
    }
    actions
}

/// Whether either player's total stack count changed between `old` and
/// `new` at the hexes an action actually touched. Untouched hexes cannot
/// have changed, so restricting the comparison to `touched` is exact, not
/// an approximation.
fn stack_counts_changed(old: &BoardCodes, new: &BoardCodes, touched: &[HexIndex]) -> bool {
    Player::ALL.into_iter().any(|player| {
        let has_stack = &tables::HAS_STACK[player as usize];
        let old_sum: u32 = touched.iter().map(|&h| has_stack[old[h as usize] as usize] as u32).sum();
        let new_sum: u32 = touched.iter().map(|&h| has_stack[new[h as usize] as usize] as u32).sum();
        old_sum != new_sum
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A full game position: the board, whose turn it is, and the bookkeeping
/// needed to detect a terminal state.
pub struct GameState {
    board_codes: BoardCodes,
    current_player: Player,
    turn: u32,
    credit: u8,
    is_terminal: bool,
}

impl GameState {
    /// The classic starting position, White to move.
    #[must_use]
    pub fn new() -> GameState {
        let mut state = GameState {
            board_codes: starting_board(),
            current_player: Player::White,
            turn: 1,
            credit: MAX_CREDIT,
            is_terminal: false,
        };
        state.is_terminal = state.is_terminated();
        state
    }

    /// Build a state from an arbitrary board, computing whether it is
    /// already terminal. Mainly useful for constructing test positions.
    #[must_use]
    pub fn from_board(board_codes: BoardCodes, current_player: Player) -> GameState {
        let mut state = GameState {
            board_codes,
            current_player,
            turn: 1,
            credit: MAX_CREDIT,
            is_terminal: false,
        };
        state.is_terminal = state.is_terminated();
        state
    }

    /// Override the credit counter (re-deriving `is_terminal`). Used to set
    /// up credit-exhaustion scenarios without replaying an entire game.
    #[must_use]
    pub fn with_credit(mut self, credit: u8) -> GameState {
        self.credit = credit;
        self.is_terminal = self.is_terminated();
        self
    }

    /// Override the turn counter.
    #[must_use]
    pub fn with_turn(mut self, turn: u32) -> GameState {
        self.turn = turn;
        self
    }

    #[must_use]
    pub fn board_codes(&self) -> &BoardCodes {
        &self.board_codes
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn credit(&self) -> u8 {
        self.credit
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// True iff any cube-move (a loose cube, or the top of a stack) is
    /// legal for the side to move. Sufficient to detect "has any action at
    /// all", since every legal compound action starts with a legal cube-move
    /// or a legal whole-stack move, and a stack is also a cube for this
    /// purpose — its top can always peel off if anything can move it.
    #[must_use]
    pub fn has_action(&self) -> bool {
        if self.is_terminal {
            return false;
        }
        for source in cube_sources(&self.board_codes, self.current_player) {
            for dir in HexDirection::ALL {
                if try_cube_path1_action(&self.board_codes, source, dir).is_some() {
                    return true;
                }
            }
        }
        false
    }

    /// True iff `player` has at least one fighter (non-Wise cube) sitting on
    /// a hex of its own goal row.
    #[must_use]
    pub fn player_is_arrived(&self, player: Player) -> bool {
        let has_fighter = &tables::HAS_FIGHTER[player as usize];
        goal_indices(player)
            .iter()
            .any(|&h| has_fighter[self.board_codes[h as usize] as usize] != 0)
    }

    /// True iff either player has arrived, credit has run out, or the side
    /// to move has no legal action.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        let terminated = self.player_is_arrived(Player::White)
            || self.player_is_arrived(Player::Black)
            || self.credit == 0
            || !self.has_action();
        if terminated {
            log::trace!(
                "game terminated at turn {} (credit {}, player {:?})",
                self.turn,
                self.credit,
                self.current_player
            );
        }
        terminated
    }

    /// `(white, black)` rewards once the game is over, or `None` if it is
    /// still ongoing.
    #[must_use]
    pub fn get_rewards(&self) -> Option<(Reward, Reward)> {
        if self.player_is_arrived(Player::White) {
            Some((Reward::Win, Reward::Loss))
        } else if self.player_is_arrived(Player::Black) {
            Some((Reward::Loss, Reward::Win))
        } else if self.credit == 0 {
            Some((Reward::Draw, Reward::Draw))
        } else if !self.has_action() {
            match self.current_player {
                Player::White => Some((Reward::Loss, Reward::Win)),
                Player::Black => Some((Reward::Win, Reward::Loss)),
            }
        } else {
            None
        }
    }

    /// Every legal compound action for the side to move, in the
    /// cube-first-then-stack-first enumeration order.
    #[must_use]
    pub fn get_actions(&self) -> Vec<Action> {
        if self.is_terminal {
            return Vec::new();
        }
        let mut actions = cube_first_actions(&self.board_codes, self.current_player);
        actions.extend(stack_first_actions(&self.board_codes, self.current_player));
        actions
    }

    /// Canonical names of [`GameState::get_actions`], in the same order.
    #[must_use]
    pub fn get_action_names(&self) -> Vec<String> {
        self.get_actions().iter().map(Action::name).collect()
    }

    /// Total fighters (Rock/Paper/Scissors cubes) each player has on the
    /// board, indexed by [`Player`].
    #[must_use]
    pub fn fighter_counts(&self) -> [u32; Player::NUM_PLAYERS] {
        let mut counts = [0u32; Player::NUM_PLAYERS];
        for player in Player::ALL {
            counts[player as usize] = self
                .board_codes
                .iter()
                .map(|&code| u32::from(tables::FIGHTER_COUNT[player as usize][code as usize]))
                .sum();
        }
        counts
    }

    /// Total cubes (fighters and Wise) each player has on the board.
    #[must_use]
    pub fn cube_counts(&self) -> [u32; Player::NUM_PLAYERS] {
        let mut counts = [0u32; Player::NUM_PLAYERS];
        for player in Player::ALL {
            counts[player as usize] = self
                .board_codes
                .iter()
                .map(|&code| u32::from(tables::CUBE_COUNT[player as usize][code as usize]))
                .sum();
        }
        counts
    }

    /// For each player, the goal-row distance of every hex holding one of
    /// its fighters. Useful groundwork for a race-aware evaluator.
    #[must_use]
    pub fn distances_to_goal(&self) -> [Vec<u8>; Player::NUM_PLAYERS] {
        Player::ALL.map(|player| {
            let has_fighter = &tables::HAS_FIGHTER[player as usize];
            self.board_codes
                .iter()
                .enumerate()
                .filter(|&(_, &code)| has_fighter[code as usize] != 0)
                .map(|(hex, _)| distance_to_goal(player, hex as HexIndex))
                .collect()
        })
    }

    /// Apply `action`, returning the resulting state. `action` must have
    /// come from this state's own [`GameState::get_actions`]; applying any
    /// other action is undefined behavior (debug builds assert the action's
    /// touched hexes are in range).
    #[must_use]
    pub fn apply_action(&self, action: &Action) -> GameState {
        debug_assert!(
            action.path_vertices.iter().all(|&h| (h as usize) < NUM_HEXES),
            "action references an out-of-range hex"
        );

        let reset_credit = action.capture_code != 0
            || stack_counts_changed(&self.board_codes, &action.next_board_codes, &action.path_vertices);
        let credit = if reset_credit {
            MAX_CREDIT
        } else {
            self.credit.saturating_sub(1)
        };

        let mut next = GameState {
            board_codes: action.next_board_codes,
            current_player: !self.current_player,
            turn: self.turn + 1,
            credit,
            is_terminal: false,
        };
        next.is_terminal = next.is_terminated();
        next
    }

    /// Apply `action` in place, returning the bookkeeping needed to
    /// [`GameState::undo_action_mut`] it. Only the hexes the action touched
    /// (at most three) are recorded, avoiding the full-board clone
    /// [`GameState::apply_action`] performs — useful for tree search that
    /// walks and backtracks a single mutable state.
    pub fn apply_action_mut(&mut self, action: &Action) -> UndoInfo {
        debug_assert!(
            action.path_vertices.iter().all(|&h| (h as usize) < NUM_HEXES),
            "action references an out-of-range hex"
        );

        let mut cells = [(0u8, 0u8); 3];
        for (slot, &h) in action.path_vertices.iter().enumerate() {
            cells[slot] = (h, self.board_codes[h as usize]);
        }
        let undo = UndoInfo {
            cells,
            cell_count: action.path_vertices.len() as u8,
            prior_credit: self.credit,
            prior_turn: self.turn,
            prior_player: self.current_player,
            prior_is_terminal: self.is_terminal,
        };

        let reset_credit = action.capture_code != 0
            || stack_counts_changed(&self.board_codes, &action.next_board_codes, &action.path_vertices);

        for &h in &action.path_vertices {
            self.board_codes[h as usize] = action.next_board_codes[h as usize];
        }
        self.credit = if reset_credit {
            MAX_CREDIT
        } else {
            self.credit.saturating_sub(1)
        };
        self.turn += 1;
        self.current_player = !self.current_player;
        self.is_terminal = self.is_terminated();

        undo
    }

    /// Reverse an [`GameState::apply_action_mut`] call, given the
    /// [`UndoInfo`] it returned.
    pub fn undo_action_mut(&mut self, undo: UndoInfo) {
        for slot in 0..undo.cell_count as usize {
            let (h, code) = undo.cells[slot];
            self.board_codes[h as usize] = code;
        }
        self.credit = undo.prior_credit;
        self.turn = undo.prior_turn;
        self.current_player = undo.prior_player;
        self.is_terminal = undo.prior_is_terminal;
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DisplayBoard(&self.board_codes))
    }
}

#[derive(Copy, Clone, Debug)]
/// Opaque bookkeeping returned by [`GameState::apply_action_mut`] and
/// consumed by [`GameState::undo_action_mut`].
pub struct UndoInfo {
    cells: [(HexIndex, u8); 3],
    cell_count: u8,
    prior_credit: u8,
    prior_turn: u32,
    prior_player: Player,
    prior_is_terminal: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::CubeSort;
    use crate::hexagon::hex_index;
    use crate::hexstate::HexState;

    fn empty() -> BoardCodes {
        crate::board::empty_board()
    }

    #[test]
    fn starting_position_is_not_terminal() {
        let state = GameState::new();
        assert!(!state.is_terminal());
        assert!(state.has_action());
        assert_eq!(state.get_rewards(), None);
    }

    #[test]
    fn scenario_stack_move_onto_empty_is_legal() {
        // b4=c3: the White Wise stack steps one hex onto an empty cell.
        let state = GameState::new();
        let names = state.get_action_names();
        assert!(names.contains(&"b4=c3".to_string()), "{names:?}");
    }

    #[test]
    fn scenario_stack_move_onto_friendly_single_is_illegal() {
        // b4=b5 would require a whole-stack move onto a friendly single,
        // which only a cube-move merge may do.
        let state = GameState::new();
        let names = state.get_action_names();
        assert!(!names.contains(&"b4=b5".to_string()), "{names:?}");
    }

    #[test]
    fn scenario_cube_move_stacking_a_fighter_onto_a_friendly_single_is_legal() {
        // a3-b3: White Scissors merges onto White Rock.
        let state = GameState::new();
        let names = state.get_action_names();
        assert!(names.contains(&"a3-b3".to_string()), "{names:?}");
    }

    #[test]
    fn scenario_two_sub_move_compound_action_from_the_start() {
        let state = GameState::new();
        let names = state.get_action_names();
        assert!(names.contains(&"b4=c3-d3".to_string()), "{names:?}");
    }

    #[test]
    fn scenario_capture_by_a_single_cube() {
        let mut board = empty();
        board[hex_index("c4").unwrap() as usize] =
            HexState::single(Player::White, CubeSort::Rock).encode();
        board[hex_index("c5").unwrap() as usize] =
            HexState::single(Player::Black, CubeSort::Scissors).encode();

        let state = GameState::from_board(board, Player::White);
        let names = state.get_action_names();
        assert!(names.contains(&"c4-c5!".to_string()), "{names:?}");

        let action = state
            .get_actions()
            .into_iter()
            .find(|a| a.name() == "c4-c5!")
            .unwrap();
        let next = state.apply_action(&action);
        let c4 = hex_index("c4").unwrap() as usize;
        let c5 = hex_index("c5").unwrap() as usize;
        assert_eq!(next.board_codes()[c4], 0);
        assert_eq!(
            HexState::decode(next.board_codes()[c5] as u16).unwrap(),
            HexState::Single {
                player: Player::White,
                cube: CubeSort::Rock
            }
        );
        assert_eq!(next.credit(), MAX_CREDIT);
    }

    #[test]
    fn scenario_terminal_by_arrival() {
        let mut board = empty();
        board[hex_index("g1").unwrap() as usize] =
            HexState::single(Player::White, CubeSort::Rock).encode();
        let state = GameState::from_board(board, Player::White);

        assert!(state.is_terminated());
        assert_eq!(state.get_rewards(), Some((Reward::Win, Reward::Loss)));
    }

    #[test]
    fn scenario_terminal_by_credit_exhaustion() {
        let mut board = empty();
        let d4 = hex_index("d4").unwrap();
        board[d4 as usize] = HexState::single(Player::White, CubeSort::Rock).encode();

        let state = GameState::from_board(board, Player::White).with_credit(1);
        assert!(!state.is_terminated());

        // Any legal non-capturing cube move decrements credit to zero.
        let action = state.get_actions().into_iter().next().unwrap();
        let next = state.apply_action(&action);
        assert_eq!(next.credit(), 0);
        assert!(next.is_terminated());
        assert_eq!(next.get_rewards(), Some((Reward::Draw, Reward::Draw)));
    }

    #[test]
    fn scenario_terminal_by_no_legal_action() {
        // A lone White Wise stack surrounded by friendly-owned... simplest
        // way to strand a side is an empty board save a single Wise cube
        // with nowhere non-hostile to go is hard to build minimally; instead
        // verify the symmetric case: Black to move with no cubes at all.
        let board = empty();
        let state = GameState::from_board(board, Player::Black);
        assert!(state.is_terminated());
        assert_eq!(state.get_rewards(), Some((Reward::Win, Reward::Loss)));
    }

    #[test]
    fn reward_pairs_never_both_win_or_both_loss() {
        for rewards in [
            Some((Reward::Win, Reward::Loss)),
            Some((Reward::Loss, Reward::Win)),
            Some((Reward::Draw, Reward::Draw)),
        ] {
            if let Some((white, black)) = rewards {
                let sum = white as i8 + black as i8;
                assert_eq!(sum, 0);
            }
        }
    }

    #[test]
    fn apply_action_mut_and_undo_round_trip() {
        let mut state = GameState::new();
        let before = state.clone();
        let action = state.get_actions().into_iter().next().unwrap();

        let undo = state.apply_action_mut(&action);
        assert_ne!(state, before);

        state.undo_action_mut(undo);
        assert_eq!(state, before);
    }

    #[test]
    fn apply_action_and_apply_action_mut_agree() {
        let state = GameState::new();
        for action in state.get_actions() {
            let via_clone = state.apply_action(&action);

            let mut via_mut = state.clone();
            via_mut.apply_action_mut(&action);

            assert_eq!(via_clone, via_mut);
        }
    }

    #[test]
    fn fighter_and_cube_counts_match_the_classic_setup() {
        let state = GameState::new();
        // 12 fighters + 2 Wise cubes per side.
        assert_eq!(state.fighter_counts(), [12, 12]);
        assert_eq!(state.cube_counts(), [14, 14]);
    }

    /// The 186 legal action names for the classic starting position, as
    /// produced by the reference engine this crate was distilled from.
    /// Order is irrelevant here — only set membership is asserted against.
    const ORACLE_OPENING_ACTION_NAMES: [&str; 186] = [
        "a1-a2", "a1-a2=a1", "a1-b1", "a1-b1=a1", "a1-b1=c1", "a1-b1=d2", "a1-b2", "a1-b2=a1",
        "a1-b2=c1", "a1-b2=c2", "a1-b2=d1", "a1-b2=d3", "a2-a1", "a2-a1=a2", "a2-a3",
        "a2-a3=a2", "a2-b2", "a2-b2=a2", "a2-b2=c1", "a2-b2=c2", "a2-b2=d1", "a2-b2=d3",
        "a2-b3", "a2-b3=a2", "a2-b3=c2", "a2-b3=c3", "a2-b3=d2", "a2-b3=d4", "a3-a2",
        "a3-a2=a3", "a3-a4", "a3-a4=a3", "a3-b3", "a3-b3=a3", "a3-b3=c2", "a3-b3=c3",
        "a3-b3=d2", "a3-b3=d4", "a4-a3", "a4-a3=a4", "a4-a5", "a4-a5=a4", "a4-b5",
        "a4-b5=a4", "a4-b5=c4", "a4-b5=c5", "a4-b5=d4", "a4-b5=d6", "a5-a4", "a5-a4=a5",
        "a5-a6", "a5-a6=a5", "a5-b5", "a5-b5=a5", "a5-b5=c4", "a5-b5=c5", "a5-b5=d4",
        "a5-b5=d6", "a5-b6", "a5-b6=a5", "a5-b6=c5", "a5-b6=c6", "a5-b6=d5", "a5-b6=d7",
        "a6-a5", "a6-a5=a6", "a6-b6", "a6-b6=a6", "a6-b6=c5", "a6-b6=c6", "a6-b6=d5",
        "a6-b6=d7", "a6-b7", "a6-b7=a6", "a6-b7=c6", "a6-b7=d6", "b1-a1", "b1-a1=b1",
        "b1-b2", "b1-b2=b1", "b1-b2=c1", "b1-b2=c2", "b1-b2=d1", "b1-b2=d3", "b1-c1",
        "b2-a1", "b2-a1=b2", "b2-a1=c2", "b2-a2", "b2-a2=b2", "b2-a2=c1", "b2-b1",
        "b2-b1=b2", "b2-b1=c1", "b2-b1=d2", "b2-b3", "b2-b3=b2", "b2-b3=c2", "b2-b3=c3",
        "b2-b3=d2", "b2-b3=d4", "b2-c1", "b2-c2", "b3-a2", "b3-a2=b3", "b3-a2=c3",
        "b3-a3", "b3-a3=b3", "b3-a3=c2", "b3-b2", "b3-b2=b3", "b3-b2=c1", "b3-b2=c2",
        "b3-b2=d1", "b3-b2=d3", "b3-c2", "b3-c3", "b4-c3", "b4-c4", "b4=c3", "b4=c3-b4",
        "b4=c3-c2", "b4=c3-c4", "b4=c3-d3", "b4=c3-d4", "b4=c4", "b4=c4-b4", "b4=c4-c3",
        "b4=c4-c5", "b4=c4-d4", "b4=c4-d5", "b4=d3", "b4=d3-c2", "b4=d3-c3", "b4=d3-d2",
        "b4=d3-d4", "b4=d3-e2", "b4=d3-e3", "b4=d5", "b4=d5-c4", "b4=d5-c5", "b4=d5-d4",
        "b4=d5-d6", "b4=d5-e4", "b4=d5-e5", "b5-a4", "b5-a4=b5", "b5-a4=c5", "b5-a5",
        "b5-a5=b5", "b5-a5=c4", "b5-b6", "b5-b6=b5", "b5-b6=c5", "b5-b6=c6", "b5-b6=d5",
        "b5-b6=d7", "b5-c4", "b5-c5", "b6-a5", "b6-a5=b6", "b6-a5=c6", "b6-a6",
        "b6-a6=b6", "b6-a6=c5", "b6-b5", "b6-b5=b6", "b6-b5=c4", "b6-b5=c5", "b6-b5=d4",
        "b6-b5=d6", "b6-b7", "b6-b7=b6", "b6-b7=c6", "b6-b7=d6", "b6-c5", "b6-c6",
        "b7-a6", "b7-a6=b7", "b7-b6", "b7-b6=b7", "b7-b6=c5", "b7-b6=c6", "b7-b6=d5",
        "b7-b6=d7", "b7-c6",
    ];

    #[test]
    fn the_classic_opening_position_has_exactly_186_legal_actions() {
        let state = GameState::new();
        assert_eq!(state.get_actions().len(), 186);
    }

    #[test]
    fn the_classic_opening_action_set_matches_the_reference_oracle() {
        let state = GameState::new();
        let actual: std::collections::HashSet<String> = state.get_action_names().into_iter().collect();
        let expected: std::collections::HashSet<String> =
            ORACLE_OPENING_ACTION_NAMES.iter().map(|&s| s.to_string()).collect();
        assert_eq!(actual.len(), ORACLE_OPENING_ACTION_NAMES.len(), "duplicate action names produced");
        assert_eq!(actual, expected);
    }

    fn midgame_board_capture_available() -> BoardCodes {
        // White Rock on c4 threatens Black Scissors on c5; White to move.
        let mut board = empty();
        board[hex_index("c4").unwrap() as usize] =
            HexState::single(Player::White, CubeSort::Rock).encode();
        board[hex_index("c5").unwrap() as usize] =
            HexState::single(Player::Black, CubeSort::Scissors).encode();
        board[hex_index("d4").unwrap() as usize] =
            HexState::single(Player::Black, CubeSort::Paper).encode();
        board
    }

    fn midgame_board_stack_heavy() -> BoardCodes {
        // Both sides down to a single Wise stack each, facing off mid-board.
        let mut board = empty();
        board[hex_index("c3").unwrap() as usize] =
            HexState::stack(Player::White, CubeSort::Wise, CubeSort::Wise).unwrap().encode();
        board[hex_index("e3").unwrap() as usize] =
            HexState::stack(Player::Black, CubeSort::Wise, CubeSort::Wise).unwrap().encode();
        board[hex_index("d3").unwrap() as usize] =
            HexState::single(Player::White, CubeSort::Rock).encode();
        board
    }

    fn midgame_board_near_terminal() -> BoardCodes {
        // White Rock one step from its goal row, nothing else on the board.
        let mut board = empty();
        board[hex_index("g3").unwrap() as usize] =
            HexState::single(Player::Black, CubeSort::Rock).encode();
        board[hex_index("f3").unwrap() as usize] =
            HexState::single(Player::White, CubeSort::Paper).encode();
        board
    }

    #[test]
    fn has_action_agrees_with_get_actions_on_the_classic_start() {
        let state = GameState::new();
        assert_eq!(state.has_action(), !state.get_actions().is_empty());
    }

    #[test]
    fn has_action_agrees_with_get_actions_on_a_mid_capture_board() {
        let state = GameState::from_board(midgame_board_capture_available(), Player::White);
        assert_eq!(state.has_action(), !state.get_actions().is_empty());
    }

    #[test]
    fn has_action_agrees_with_get_actions_on_a_stack_heavy_board() {
        let state = GameState::from_board(midgame_board_stack_heavy(), Player::White);
        assert_eq!(state.has_action(), !state.get_actions().is_empty());
        let state = GameState::from_board(midgame_board_stack_heavy(), Player::Black);
        assert_eq!(state.has_action(), !state.get_actions().is_empty());
    }

    #[test]
    fn has_action_agrees_with_get_actions_on_a_near_terminal_board() {
        let state = GameState::from_board(midgame_board_near_terminal(), Player::White);
        assert_eq!(state.has_action(), !state.get_actions().is_empty());
        let state = GameState::from_board(midgame_board_near_terminal(), Player::Black);
        assert_eq!(state.has_action(), !state.get_actions().is_empty());
    }
}
