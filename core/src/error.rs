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

//! Error types for the parts of the engine that can fail: hex state
//! construction and code decoding. Move legality is never an error here — an
//! illegal sub-move is simply absent from the enumerator's output.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Everything that can go wrong while building or decoding engine values.
pub enum PijersiError {
    /// A `HexState` was asked to combine a Wise top with a non-Wise bottom, or
    /// had `has_stack` set while empty (or similar internal incoherence).
    #[error("invalid hex state construction: {reason}")]
    InvalidConstruction { reason: &'static str },

    /// A hex code fell outside the valid `[0, 128)` range.
    #[error("hex code {code} is out of the decodable range [0, 128)")]
    DecodeOutOfRange { code: u16 },
}

/// Convenience alias used throughout the codec and board modules.
pub type PijersiResult<T> = Result<T, PijersiError>;
