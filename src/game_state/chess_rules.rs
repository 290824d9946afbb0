//! Canonical chess-rule constants.
//!
//! Static rule-related literals: the standard starting position, home ranks
//! and the squares that castling bookkeeping keys on.

use crate::game_state::chess_types::{
    Color, Square, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE, CASTLE_LIGHT_KINGSIDE,
    CASTLE_LIGHT_QUEENSIDE, CastlingRights,
};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const A1: Square = 0;
pub const E1: Square = 4;
pub const H1: Square = 7;
pub const A8: Square = 56;
pub const E8: Square = 60;
pub const H8: Square = 63;

#[inline]
pub const fn pawn_home_rank(color: Color) -> i8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

#[inline]
pub const fn promotion_rank(color: Color) -> i8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

#[inline]
pub const fn king_home_square(color: Color) -> Square {
    match color {
        Color::Light => E1,
        Color::Dark => E8,
    }
}

/// Castling right that is lost once `square` is vacated by its rook or captured on.
#[inline]
pub const fn castling_right_for_corner(square: Square) -> Option<CastlingRights> {
    match square {
        A1 => Some(CASTLE_LIGHT_QUEENSIDE),
        H1 => Some(CASTLE_LIGHT_KINGSIDE),
        A8 => Some(CASTLE_DARK_QUEENSIDE),
        H8 => Some(CASTLE_DARK_KINGSIDE),
        _ => None,
    }
}
