//! Castling: the one king move that is not a single step.
//!
//! Requires the matching right, the own rook on its corner, an empty path
//! between king and rook, and a king that is not currently attacked. With the
//! default configuration the square the king passes over must not be attacked
//! either. The landing square is covered by the evaluator's general king
//! safety check.

use crate::game_state::chess_rules::{king_home_square, A1, A8, H1, H8};
use crate::game_state::rules_config::RulesConfig;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{MoveKind, PlannedMove};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{
    displacement, is_path_clear, sliding_direction, ORTHOGONAL_DIRECTIONS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

pub const fn castling_right(color: Color, side: CastleSide) -> CastlingRights {
    match (color, side) {
        (Color::Light, CastleSide::Kingside) => CASTLE_LIGHT_KINGSIDE,
        (Color::Light, CastleSide::Queenside) => CASTLE_LIGHT_QUEENSIDE,
        (Color::Dark, CastleSide::Kingside) => CASTLE_DARK_KINGSIDE,
        (Color::Dark, CastleSide::Queenside) => CASTLE_DARK_QUEENSIDE,
    }
}

/// `(rook start, rook destination)`. The destination is also the square the
/// king passes over.
pub const fn rook_squares(color: Color, side: CastleSide) -> (Square, Square) {
    match (color, side) {
        (Color::Light, CastleSide::Kingside) => (H1, H1 - 2),
        (Color::Light, CastleSide::Queenside) => (A1, A1 + 3),
        (Color::Dark, CastleSide::Kingside) => (H8, H8 - 2),
        (Color::Dark, CastleSide::Queenside) => (A8, A8 + 3),
    }
}

/// Side being castled to when `start -> end` is a two-file king move from home.
pub fn castle_side_for(color: Color, start: Square, end: Square) -> Option<CastleSide> {
    if start != king_home_square(color) {
        return None;
    }
    match displacement(start, end) {
        (2, 0) => Some(CastleSide::Kingside),
        (-2, 0) => Some(CastleSide::Queenside),
        _ => None,
    }
}

pub fn plan_castling(
    game_state: &GameState,
    start: Square,
    end: Square,
    color: Color,
    config: &RulesConfig,
) -> Option<PlannedMove> {
    let board = &game_state.board;
    let side = castle_side_for(color, start, end)?;

    if !game_state.has_castling_right(castling_right(color, side)) {
        return None;
    }

    let (rook_from, transit) = rook_squares(color, side);
    if board.piece_at(rook_from) != Some(Piece::new(color, PieceKind::Rook)) {
        return None;
    }

    let (direction, steps) =
        sliding_direction(&ORTHOGONAL_DIRECTIONS, displacement(start, rook_from))?;
    if !is_path_clear(board, start, direction, steps) {
        return None;
    }

    if is_square_attacked(board, start, color) {
        return None;
    }

    if config.castling_transit_must_be_safe && is_square_attacked(board, transit, color) {
        return None;
    }

    Some(PlannedMove::plain(MoveKind::Castle(side)))
}

#[cfg(test)]
mod tests {
    use super::{plan_castling, CastleSide};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;
    use crate::game_state::rules_config::RulesConfig;
    use crate::move_generation::legal_move_apply::MoveKind;

    const OPEN_CASTLING_FEN: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

    #[test]
    fn both_sides_castle_on_an_open_back_rank() {
        let game = GameState::from_fen(OPEN_CASTLING_FEN).expect("test FEN should parse");
        let config = RulesConfig::default();

        assert_eq!(
            plan_castling(&game, 4, 6, Color::Light, &config).map(|p| p.kind),
            Some(MoveKind::Castle(CastleSide::Kingside))
        );
        assert_eq!(
            plan_castling(&game, 4, 2, Color::Light, &config).map(|p| p.kind),
            Some(MoveKind::Castle(CastleSide::Queenside))
        );
        assert_eq!(
            plan_castling(&game, 60, 62, Color::Dark, &config).map(|p| p.kind),
            Some(MoveKind::Castle(CastleSide::Kingside))
        );
    }

    #[test]
    fn queenside_needs_b_file_empty_too() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1")
            .expect("test FEN should parse");
        assert_eq!(plan_castling(&game, 4, 2, Color::Light, &RulesConfig::default()), None);
    }

    #[test]
    fn revoked_right_or_missing_rook_blocks_castling() {
        let no_right = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1")
            .expect("test FEN should parse");
        assert_eq!(plan_castling(&no_right, 4, 6, Color::Light, &RulesConfig::default()), None);

        let no_rook = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K3 w KQkq - 0 1")
            .expect("test FEN should parse");
        assert_eq!(plan_castling(&no_rook, 4, 6, Color::Light, &RulesConfig::default()), None);
    }

    #[test]
    fn cannot_castle_out_of_check() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1")
            .expect("test FEN should parse");
        assert_eq!(plan_castling(&game, 4, 6, Color::Light, &RulesConfig::default()), None);
    }

    #[test]
    fn attacked_transit_square_depends_on_config() {
        // Dark rook on f8 covers f1.
        let game = GameState::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1")
            .expect("test FEN should parse");

        assert_eq!(plan_castling(&game, 4, 6, Color::Light, &RulesConfig::default()), None);
        assert_eq!(
            plan_castling(&game, 4, 6, Color::Light, &RulesConfig::lenient_castling())
                .map(|p| p.kind),
            Some(MoveKind::Castle(CastleSide::Kingside))
        );
    }
}
