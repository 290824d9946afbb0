//! Attack detection.
//!
//! Walks outward from a square along the orthogonal rays, the diagonal rays
//! and the knight jumps. A ray stops at its first occupied square; the piece
//! found there attacks only if its kind can strike along that geometry from
//! that distance. This is the only check-detection mechanism in the crate and
//! runs once per candidate move, so it dominates the evaluator's cost.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    first_occupied_along, offset_square, Offset, DIAGONAL_DIRECTIONS, KNIGHT_OFFSETS,
    ORTHOGONAL_DIRECTIONS,
};

#[inline]
pub fn king_square(board: &Board, color: Color) -> ChessResult<Square> {
    board.require_king_square(color)
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> ChessResult<bool> {
    let king_sq = king_square(board, color)?;
    Ok(is_square_attacked(board, king_sq, color))
}

/// True when a piece of the opposite color to `defending_color` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, defending_color: Color) -> bool {
    let mut attacked = false;
    visit_attackers(board, square, defending_color, |_, _| {
        attacked = true;
        false
    });
    attacked
}

/// Every piece attacking `square` on behalf of the opposite color to `defending_color`.
pub fn attackers_of(
    board: &Board,
    square: Square,
    defending_color: Color,
) -> Vec<(Square, PieceKind)> {
    let mut attackers = Vec::<(Square, PieceKind)>::new();
    visit_attackers(board, square, defending_color, |from, kind| {
        attackers.push((from, kind));
        true
    });
    attackers
}

/// Calls `visit` for each attacker until it returns `false`.
fn visit_attackers(
    board: &Board,
    square: Square,
    defending_color: Color,
    mut visit: impl FnMut(Square, PieceKind) -> bool,
) {
    let attacker_color = defending_color.opposite();

    for direction in ORTHOGONAL_DIRECTIONS {
        if let Some((from, kind)) = ray_attacker(board, square, direction, attacker_color) {
            if !visit(from, kind) {
                return;
            }
        }
    }

    for direction in DIAGONAL_DIRECTIONS {
        if let Some((from, kind)) = ray_attacker(board, square, direction, attacker_color) {
            if !visit(from, kind) {
                return;
            }
        }
    }

    for offset in KNIGHT_OFFSETS {
        let Some(from) = offset_square(square, offset) else {
            continue;
        };
        if board.piece_at(from) == Some(Piece::new(attacker_color, PieceKind::Knight))
            && !visit(from, PieceKind::Knight)
        {
            return;
        }
    }
}

fn ray_attacker(
    board: &Board,
    square: Square,
    direction: Offset,
    attacker_color: Color,
) -> Option<(Square, PieceKind)> {
    let (from, piece, distance) = first_occupied_along(board, square, direction)?;
    if piece.color != attacker_color {
        return None;
    }

    let diagonal = direction.0 != 0 && direction.1 != 0;
    let attacks = match piece.kind {
        PieceKind::Queen => true,
        PieceKind::Rook => !diagonal,
        PieceKind::Bishop => diagonal,
        PieceKind::King => distance == 1,
        // The pawn must sit one step behind the target along its own advance.
        PieceKind::Pawn => diagonal && distance == 1 && direction.1 == -attacker_color.pawn_direction(),
        PieceKind::Knight => false,
    };

    attacks.then_some((from, piece.kind))
}

#[cfg(test)]
mod tests {
    use super::{attackers_of, is_king_in_check, is_square_attacked};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> u8 {
        algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn pawns_attack_only_forward_diagonally() {
        let game = GameState::from_fen("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1")
            .expect("test FEN should parse");

        assert!(is_square_attacked(&game.board, sq("c4"), Color::Light));
        assert!(is_square_attacked(&game.board, sq("e4"), Color::Light));
        assert!(!is_square_attacked(&game.board, sq("d4"), Color::Light));
        assert!(!is_square_attacked(&game.board, sq("c6"), Color::Light));
        assert!(!is_square_attacked(&game.board, sq("e6"), Color::Light));
    }

    #[test]
    fn sliders_are_blocked_by_the_first_piece() {
        let game = GameState::from_fen("4k3/8/8/8/r2P3K/8/8/8 w - - 0 1")
            .expect("test FEN should parse");

        assert!(is_square_attacked(&game.board, sq("c4"), Color::Light));
        assert!(!is_square_attacked(&game.board, sq("h4"), Color::Light));
        assert_eq!(is_king_in_check(&game.board, Color::Light), Ok(false));
    }

    #[test]
    fn own_pieces_do_not_count_as_attackers() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1")
            .expect("test FEN should parse");

        assert!(!is_square_attacked(&game.board, sq("a8"), Color::Light));
        assert!(is_square_attacked(&game.board, sq("a8"), Color::Dark));
    }

    #[test]
    fn king_attacks_only_adjacent_squares() {
        let game = GameState::from_fen("8/8/8/3k4/8/8/8/4K3 w - - 0 1")
            .expect("test FEN should parse");

        assert!(is_square_attacked(&game.board, sq("e4"), Color::Light));
        assert!(!is_square_attacked(&game.board, sq("d3"), Color::Light));
    }

    #[test]
    fn lists_every_attacker() {
        let game = GameState::from_fen("4k3/8/8/8/4r3/3n4/8/4K3 w - - 0 1")
            .expect("test FEN should parse");

        let mut attackers = attackers_of(&game.board, sq("e1"), Color::Light);
        attackers.sort();
        assert_eq!(
            attackers,
            vec![(sq("d3"), PieceKind::Knight), (sq("e4"), PieceKind::Rook)]
        );
        assert_eq!(is_king_in_check(&game.board, Color::Light), Ok(true));
    }

    #[test]
    fn missing_king_is_reported() {
        let game = GameState::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").expect("empty board should parse");
        assert_eq!(
            is_king_in_check(&game.board, Color::Dark),
            Err(ChessErrors::MissingKing(Color::Dark))
        );
    }
}
