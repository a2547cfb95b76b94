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

//! Performance testing, or "perft." Counts the number of distinct action
//! sequences of a given length reachable from a state, which exercises the
//! action enumerator and `apply_action` together and gives a speed figure.

use std::time::Instant;

use crate::GameState;

/// Count the number of action sequences of length `depth` reachable from
/// `state`, printing a per-root-action breakdown and a nodes/sec figure.
pub fn perft(state: &GameState, depth: u32) -> u64 {
    let tic = Instant::now();
    let num_nodes = perft_search(state, depth, true);
    let toc = Instant::now();
    let time = toc - tic;
    let speed = (num_nodes as f64) / time.as_secs_f64();
    println!(
        "time {:.2} secs, num nodes {num_nodes}: {speed:.0} nodes/sec",
        time.as_secs_f64()
    );

    num_nodes
}

/// The core search algorithm for perft.
fn perft_search(state: &GameState, depth: u32, divide: bool) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut total = 0;
    for action in state.get_actions() {
        let next = state.apply_action(&action);
        let count = perft_search(&next, depth - 1, false);
        if divide {
            println!("{}, {count}", action.name());
        }
        total += count;
    }

    total
}
