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

//! A thin diagnostics front end over `pijersi_core`: render the board, list
//! legal actions, and run perft — nothing here searches for a good move.

use clap::{Parser, Subcommand};
use pijersi_core::{perft::perft, GameState};

#[derive(Parser)]
#[command(name = "pijersi", about = "Diagnostic command-line front end for pijersi_core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the classic starting board.
    Show,
    /// List every legal action name for a board, or the classic starting
    /// board if none is given.
    Actions {
        /// A FEN-like board token: 45 comma-separated cells in board-index
        /// order (see `pijersi_core::parse_board_token`), a space, and a
        /// side-to-move letter ('w' or 'b'). Defaults to the classic start.
        board: Option<String>,
    },
    /// Count action sequences of the given length from the classic starting
    /// board, printing a per-root-action breakdown and a nodes/sec figure.
    Perft {
        /// Number of plies to search.
        plies: u32,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Show => {
            let state = GameState::new();
            print!("{state}");
        }
        Command::Actions { board } => {
            let state = match board {
                Some(token) => {
                    let (codes, player) = pijersi_core::parse_board_token(&token)
                        .expect("invalid board token");
                    GameState::from_board(codes, player)
                }
                None => GameState::new(),
            };
            for name in state.get_action_names() {
                println!("{name}");
            }
        }
        Command::Perft { plies } => {
            let state = GameState::new();
            perft(&state, plies);
        }
    }
}
