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

//! The contents of a single hex, and its bit-packed 7-bit encoding.

use crate::cube::CubeSort;
use crate::error::{PijersiError, PijersiResult};
use crate::player::Player;

/// Size of the hex-code domain: `[0, 128)`.
pub const CODE_BASE: u32 = 128;
/// Size of the 2-hex path-code domain.
pub const CODE_BASE_2: u32 = CODE_BASE * CODE_BASE;
/// Size of the 3-hex path-code domain.
pub const CODE_BASE_3: u32 = CODE_BASE_2 * CODE_BASE;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// The contents of one cell of the board.
pub enum HexState {
    Empty,
    Single {
        player: Player,
        cube: CubeSort,
    },
    Stack {
        player: Player,
        bottom: CubeSort,
        top: CubeSort,
    },
}

impl HexState {
    /// Build a single-cube hex state. Always succeeds: there is no invariant
    /// to violate with a single cube.
    #[inline(always)]
    pub const fn single(player: Player, cube: CubeSort) -> HexState {
        HexState::Single { player, cube }
    }

    /// Build a stacked hex state, rejecting a Wise top over a non-Wise bottom.
    ///
    /// # Errors
    ///
    /// Returns [`PijersiError::InvalidConstruction`] if `top` is Wise and
    /// `bottom` is not.
    pub fn stack(player: Player, bottom: CubeSort, top: CubeSort) -> PijersiResult<HexState> {
        if matches!(top, CubeSort::Wise) && !matches!(bottom, CubeSort::Wise) {
            return Err(PijersiError::InvalidConstruction {
                reason: "a Wise top may only sit on a Wise bottom",
            });
        }
        Ok(HexState::Stack {
            player,
            bottom,
            top,
        })
    }

    /// Pack this state into its 7-bit code.
    ///
    /// Bit layout, LSB first: bit0 non-empty, bit1 has_stack, bit2 player,
    /// bits3-4 bottom sort, bits5-6 top sort.
    #[inline(always)]
    #[must_use]
    pub const fn encode(self) -> u8 {
        match self {
            HexState::Empty => 0,
            HexState::Single { player, cube } => 1 | ((player as u8) << 2) | ((cube as u8) << 3),
            HexState::Stack {
                player,
                bottom,
                top,
            } => 1 | 2 | ((player as u8) << 2) | ((bottom as u8) << 3) | ((top as u8) << 5),
        }
    }

    /// Unpack a 7-bit code into a hex state. Total over `[0, 128)`: a code
    /// whose unused bit positions carry garbage (because `has_stack` is unset)
    /// simply ignores them rather than erroring, since such codes are never
    /// produced by [`HexState::encode`] but must still decode to *something*.
    ///
    /// Does not re-validate the Wise-on-top invariant: a code that was
    /// fabricated rather than produced by this engine can decode into a
    /// `Stack` that violates it. Use [`HexState::stack`] to construct a
    /// checked value; this function only rejects codes outside the domain.
    ///
    /// # Errors
    ///
    /// Returns [`PijersiError::DecodeOutOfRange`] if `code >= 128`.
    pub fn decode(code: u16) -> PijersiResult<HexState> {
        if code >= CODE_BASE as u16 {
            return Err(PijersiError::DecodeOutOfRange { code });
        }
        let code = code as u8;
        if code & 1 == 0 {
            return Ok(HexState::Empty);
        }
        let has_stack = code & 2 != 0;
        let player = if (code >> 2) & 1 == 0 {
            Player::White
        } else {
            Player::Black
        };
        let bottom = CubeSort::ALL[((code >> 3) & 3) as usize];
        if has_stack {
            let top = CubeSort::ALL[((code >> 5) & 3) as usize];
            Ok(HexState::Stack {
                player,
                bottom,
                top,
            })
        } else {
            Ok(HexState::Single {
                player,
                cube: bottom,
            })
        }
    }

    /// Iterate over every legal hex state: empty, every single cube, and
    /// every stack obeying the Wise-on-top invariant.
    pub fn iter_legal() -> impl Iterator<Item = HexState> {
        std::iter::once(HexState::Empty).chain(Player::ALL.into_iter().flat_map(|player| {
            CubeSort::ALL.into_iter().flat_map(move |bottom| {
                let single = std::iter::once(HexState::Single {
                    player,
                    cube: bottom,
                });
                let tops: &[CubeSort] = if matches!(bottom, CubeSort::Wise) {
                    &CubeSort::ALL
                } else {
                    &CubeSort::FIGHTERS
                };
                let stacks = tops.iter().map(move |&top| HexState::Stack {
                    player,
                    bottom,
                    top,
                });
                single.chain(stacks)
            })
        }))
    }
}

/// Pack a 2-hex path into its 14-bit code.
#[inline(always)]
#[must_use]
pub const fn encode_path2(codes: [u8; 2]) -> u16 {
    codes[0] as u16 + (codes[1] as u16) * CODE_BASE as u16
}

/// Unpack a 2-hex path code.
#[inline(always)]
#[must_use]
pub const fn decode_path2(code: u16) -> [u8; 2] {
    [(code % CODE_BASE as u16) as u8, (code / CODE_BASE as u16) as u8]
}

/// Pack a 3-hex path into its 21-bit code.
#[inline(always)]
#[must_use]
pub const fn encode_path3(codes: [u8; 3]) -> u32 {
    codes[0] as u32 + (codes[1] as u32) * CODE_BASE + (codes[2] as u32) * CODE_BASE_2
}

/// Unpack a 3-hex path code.
#[inline(always)]
#[must_use]
pub const fn decode_path3(code: u32) -> [u8; 3] {
    [
        (code % CODE_BASE) as u8,
        ((code / CODE_BASE) % CODE_BASE) as u8,
        (code / CODE_BASE_2) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_over_legal_image() {
        for state in HexState::iter_legal() {
            let code = state.encode();
            assert!((code as u32) < CODE_BASE);
            let decoded = HexState::decode(code as u16).unwrap();
            assert_eq!(decoded, state);
        }
    }

    #[test]
    fn empty_encodes_to_zero() {
        assert_eq!(HexState::Empty.encode(), 0);
    }

    #[test]
    fn decode_rejects_out_of_range() {
        assert!(matches!(
            HexState::decode(128),
            Err(PijersiError::DecodeOutOfRange { code: 128 })
        ));
    }

    #[test]
    fn wise_on_non_wise_is_rejected_at_construction() {
        assert!(HexState::stack(Player::White, CubeSort::Rock, CubeSort::Wise).is_err());
        assert!(HexState::stack(Player::White, CubeSort::Wise, CubeSort::Wise).is_ok());
    }

    #[test]
    fn decode_ignores_garbage_in_unused_bits_for_singles() {
        // bit1 (has_stack) clear, but bits 5-6 (top) set to a nonzero sort.
        let code = 1 | (0 << 2) | (0 << 3) | (2 << 5);
        let decoded = HexState::decode(code).unwrap();
        assert_eq!(
            decoded,
            HexState::Single {
                player: Player::White,
                cube: CubeSort::Rock
            }
        );
    }

    #[test]
    fn path2_round_trip() {
        for a in 0..128u8 {
            for b in [0u8, 1, 42, 127] {
                let code = encode_path2([a, b]);
                assert_eq!(decode_path2(code), [a, b]);
            }
        }
    }

    #[test]
    fn path3_round_trip() {
        for &(a, b, c) in &[(0u8, 0u8, 0u8), (1, 2, 3), (127, 127, 127), (5, 0, 90)] {
            let code = encode_path3([a, b, c]);
            assert_eq!(decode_path3(code), [a, b, c]);
        }
    }
}
