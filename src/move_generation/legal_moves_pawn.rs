use crate::game_state::chess_rules::{pawn_home_rank, promotion_rank};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{MoveKind, PlannedMove};
use crate::move_generation::legal_move_shared::{displacement, offset_square};

/// Pawn rules, tried in order: single push, double push from the home rank,
/// diagonal capture, en passant. Reaching the last rank always promotes to a
/// queen.
pub fn plan_pawn_move(
    game_state: &GameState,
    start: Square,
    end: Square,
    color: Color,
) -> Option<PlannedMove> {
    let board = &game_state.board;
    let forward = color.pawn_direction();
    let (df, dr) = displacement(start, end);
    let target = board.piece_at(end);

    let kind = if df == 0 && dr == forward {
        target.is_none().then_some(MoveKind::Quiet)?
    } else if df == 0 && dr == 2 * forward {
        let passed = offset_square(start, (0, forward))?;
        let allowed = square_rank(start) == pawn_home_rank(color)
            && board.is_empty(passed)
            && target.is_none();
        allowed.then_some(MoveKind::DoublePawnPush { passed })?
    } else if df.abs() == 1 && dr == forward {
        match target {
            Some(piece) if piece.color != color => MoveKind::Capture,
            Some(_) => return None,
            None => en_passant_capture(game_state, start, end, color)?,
        }
    } else {
        return None;
    };

    let promotion = (square_rank(end) == promotion_rank(color)).then_some(PieceKind::Queen);
    Some(PlannedMove { kind, promotion })
}

fn en_passant_capture(
    game_state: &GameState,
    start: Square,
    end: Square,
    color: Color,
) -> Option<MoveKind> {
    if game_state.en_passant_square != Some(end) {
        return None;
    }

    let captured = square_at(square_file(end), square_rank(start))?;
    let enemy_pawn = Piece::new(color.opposite(), PieceKind::Pawn);
    (game_state.board.piece_at(captured) == Some(enemy_pawn))
        .then_some(MoveKind::EnPassant { captured })
}
