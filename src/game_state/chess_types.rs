//! Value types shared by the board model, the rules evaluator and the codec.
//!
//! Squares are plain indices (`0 == a1`, `7 == h1`, `63 == h8`). Requests from
//! the outside world arrive as signed `Coordinate`s and are only turned into a
//! `Square` once they are known to be on the board.

pub use crate::game_state::game_state::GameState;

/// Side to move. `Light` plays the white pieces, `Dark` the black ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank delta of a single pawn advance.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// An occupied cell. Empty cells are `None` in an `Option<Piece>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Compact castling rights bitmask.
pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE;
pub type CastlingRights = u8;

/// Both rights belonging to one color.
#[inline]
pub const fn castling_rights_of(color: Color) -> CastlingRights {
    match color {
        Color::Light => CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE,
        Color::Dark => CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE,
    }
}

/// Board square index (`0..=63`).
pub type Square = u8;

#[inline]
pub const fn square_file(square: Square) -> i8 {
    (square % 8) as i8
}

#[inline]
pub const fn square_rank(square: Square) -> i8 {
    (square / 8) as i8
}

/// Square at `(file, rank)`, or `None` when either component is off the board.
#[inline]
pub const fn square_at(file: i8, rank: i8) -> Option<Square> {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return None;
    }
    Some((rank * 8 + file) as Square)
}

/// Zero-based `(file, rank)` pair as supplied by a move request. May lie off
/// the board; `to_square` is the only way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub file: i8,
    pub rank: i8,
}

impl Coordinate {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn to_square(self) -> Option<Square> {
        square_at(self.file, self.rank)
    }
}

impl From<Square> for Coordinate {
    fn from(square: Square) -> Self {
        Self::new(square_file(square), square_rank(square))
    }
}

/// Outcome of a game as seen by the rules layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    LightWins,
    DarkWins,
    Draw,
    Undecided,
}

impl GameResult {
    /// Integer code stored by persistence collaborators.
    pub const fn code(self) -> u16 {
        match self {
            GameResult::LightWins => 0,
            GameResult::DarkWins => 1,
            GameResult::Draw => 2,
            GameResult::Undecided => 400,
        }
    }

    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(GameResult::LightWins),
            1 => Some(GameResult::DarkWins),
            2 => Some(GameResult::Draw),
            400 => Some(GameResult::Undecided),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_outside_the_board_have_no_square() {
        assert_eq!(Coordinate::new(0, 0).to_square(), Some(0));
        assert_eq!(Coordinate::new(7, 7).to_square(), Some(63));
        assert_eq!(Coordinate::new(4, 1).to_square(), Some(12));
        assert_eq!(Coordinate::new(-1, 3).to_square(), None);
        assert_eq!(Coordinate::new(3, 8).to_square(), None);
        assert_eq!(Coordinate::from(12u8), Coordinate::new(4, 1));
    }

    #[test]
    fn result_codes_round_trip() {
        for result in [
            GameResult::LightWins,
            GameResult::DarkWins,
            GameResult::Draw,
            GameResult::Undecided,
        ] {
            assert_eq!(GameResult::from_code(result.code()), Some(result));
        }
        assert_eq!(GameResult::from_code(3), None);
    }
}
