//! Static movement tables and small geometry helpers.
//!
//! Each piece kind maps to a `MovementRule`: a set of sliding directions, a
//! set of fixed single-step offsets, or the bespoke pawn rules. The tables are
//! read-only data shared by the evaluator and the attack detector.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// `(file delta, rank delta)`.
pub type Offset = (i8, i8);

pub const ORTHOGONAL_DIRECTIONS: [Offset; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const DIAGONAL_DIRECTIONS: [Offset; 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub const QUEEN_DIRECTIONS: [Offset; 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [Offset; 8] = QUEEN_DIRECTIONS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementRule {
    /// Any positive multiple of one direction, through empty squares only.
    Sliding(&'static [Offset]),
    /// Exactly one of the offsets.
    Stepping(&'static [Offset]),
    Pawn,
}

pub const fn movement_rule(kind: PieceKind) -> MovementRule {
    match kind {
        PieceKind::Pawn => MovementRule::Pawn,
        PieceKind::Knight => MovementRule::Stepping(&KNIGHT_OFFSETS),
        PieceKind::Bishop => MovementRule::Sliding(&DIAGONAL_DIRECTIONS),
        PieceKind::Rook => MovementRule::Sliding(&ORTHOGONAL_DIRECTIONS),
        PieceKind::Queen => MovementRule::Sliding(&QUEEN_DIRECTIONS),
        PieceKind::King => MovementRule::Stepping(&KING_OFFSETS),
    }
}

#[inline]
pub fn offset_square(square: Square, (df, dr): Offset) -> Option<Square> {
    square_at(square_file(square) + df, square_rank(square) + dr)
}

#[inline]
pub fn displacement(start: Square, end: Square) -> Offset {
    (
        square_file(end) - square_file(start),
        square_rank(end) - square_rank(start),
    )
}

/// Direction and step count when `delta` is a positive multiple of one of
/// `directions`.
pub fn sliding_direction(directions: &[Offset], delta: Offset) -> Option<(Offset, i8)> {
    let steps = delta.0.abs().max(delta.1.abs());
    if steps == 0 {
        return None;
    }

    directions
        .iter()
        .copied()
        .find(|&(sf, sr)| sf * steps == delta.0 && sr * steps == delta.1)
        .map(|direction| (direction, steps))
}

/// True when every square strictly between `start` and `start + steps * direction` is empty.
pub fn is_path_clear(board: &Board, start: Square, direction: Offset, steps: i8) -> bool {
    let mut current = start;
    for _ in 1..steps {
        match offset_square(current, direction) {
            Some(next) if board.is_empty(next) => current = next,
            _ => return false,
        }
    }
    true
}

/// First occupied square walking from `start` along `direction`, with its
/// distance in steps.
pub fn first_occupied_along(
    board: &Board,
    start: Square,
    direction: Offset,
) -> Option<(Square, Piece, i8)> {
    let mut current = start;
    let mut distance = 0;
    while let Some(next) = offset_square(current, direction) {
        distance += 1;
        if let Some(piece) = board.piece_at(next) {
            return Some((next, piece, distance));
        }
        current = next;
    }
    None
}
