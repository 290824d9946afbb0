//! Mailbox board: 64 cells of `Option<Piece>`.
//!
//! The board is a small `Copy` value, so every hypothetical move is played on
//! its own copy and the caller's board is never touched.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square as usize] = piece;
    }

    /// Empties `square` and returns what was there.
    #[inline]
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.cells[square as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square as usize].is_none()
    }

    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|piece| piece.color)
    }

    #[inline]
    pub fn kind_on(&self, square: Square) -> Option<PieceKind> {
        self.piece_at(square).map(|piece| piece.kind)
    }

    /// Squares holding a piece of `color`, from a1 upwards.
    pub fn occupied_squares(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| matches!(cell, Some(piece) if piece.color == color))
            .map(|(index, _)| index as Square)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Some(Piece::new(color, PieceKind::King));
        self.cells
            .iter()
            .position(|cell| *cell == king)
            .map(|index| index as Square)
    }

    /// Like `king_square` but a missing king is reported as the fatal invariant error.
    pub fn require_king_square(&self, color: Color) -> ChessResult<Square> {
        self.king_square(color).ok_or(ChessErrors::MissingKing(color))
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn cell_writes_only_touch_the_copy() {
        let mut original = Board::empty();
        original.set_piece(12, Some(Piece::new(Color::Light, PieceKind::Pawn)));

        let mut copy = original;
        let moved = copy.take_piece(12);
        copy.set_piece(28, moved);

        assert_eq!(original.kind_on(12), Some(PieceKind::Pawn));
        assert!(original.is_empty(28));
        assert!(copy.is_empty(12));
        assert_eq!(copy.color_on(28), Some(Color::Light));
    }

    #[test]
    fn king_lookup_reports_missing_king() {
        let mut board = Board::empty();
        board.set_piece(60, Some(Piece::new(Color::Dark, PieceKind::King)));

        assert_eq!(board.king_square(Color::Dark), Some(60));
        assert_eq!(
            board.require_king_square(Color::Light),
            Err(ChessErrors::MissingKing(Color::Light))
        );
    }

    #[test]
    fn occupied_squares_filters_by_color() {
        let mut board = Board::empty();
        board.set_piece(0, Some(Piece::new(Color::Light, PieceKind::Rook)));
        board.set_piece(9, Some(Piece::new(Color::Dark, PieceKind::Knight)));
        board.set_piece(63, Some(Piece::new(Color::Light, PieceKind::King)));

        let light: Vec<_> = board.occupied_squares(Color::Light).collect();
        let dark: Vec<_> = board.occupied_squares(Color::Dark).collect();
        assert_eq!(light, vec![0, 63]);
        assert_eq!(dark, vec![9]);
    }
}
