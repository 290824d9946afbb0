//! Move legality evaluation.
//!
//! `evaluate_move` answers one question: may the piece on `start` go to `end`
//! in this state, and if so what does the game look like afterwards. The
//! universal preconditions run first and short-circuit:
//!
//! 1. both coordinates are on the board and differ;
//! 2. `start` holds a piece, owned by the side to move unless `ignore_turn`;
//! 3. the destination is empty or holds an opposing piece;
//! 4. the mover's king exists, and the resulting board does not leave it
//!    attacked.
//!
//! Between 3 and 4 the piece's `MovementRule` decides whether the
//! displacement itself is possible. A rejection is `Ok(None)`; `Err` is
//! reserved for the missing-king invariant.

use crate::chess_errors::ChessResult;
use crate::game_state::rules_config::RulesConfig;
use crate::game_state::{board::Board, chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{
    apply_planned_move, MoveKind, MoveOutcome, PlannedMove,
};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::{
    displacement, is_path_clear, movement_rule, sliding_direction, MovementRule, Offset,
};
use crate::move_generation::legal_moves_king::plan_castling;
use crate::move_generation::legal_moves_pawn::plan_pawn_move;

pub fn evaluate_move(
    game_state: &GameState,
    start: Coordinate,
    end: Coordinate,
    ignore_turn: bool,
    config: &RulesConfig,
) -> ChessResult<Option<MoveOutcome>> {
    let (Some(start), Some(end)) = (start.to_square(), end.to_square()) else {
        return Ok(None);
    };
    evaluate_square_move(game_state, start, end, ignore_turn, config)
}

/// `evaluate_move` for callers that already hold on-board squares.
pub fn evaluate_square_move(
    game_state: &GameState,
    start: Square,
    end: Square,
    ignore_turn: bool,
    config: &RulesConfig,
) -> ChessResult<Option<MoveOutcome>> {
    if start == end {
        return Ok(None);
    }

    let board = &game_state.board;
    let Some(moved) = board.piece_at(start) else {
        return Ok(None);
    };

    if !ignore_turn && moved.color != game_state.side_to_move {
        return Ok(None);
    }

    if board.color_on(end) == Some(moved.color) {
        return Ok(None);
    }

    board.require_king_square(moved.color)?;

    let Some(plan) = plan_move(game_state, start, end, moved, config) else {
        return Ok(None);
    };

    let outcome = apply_planned_move(game_state, start, end, moved, plan);
    if is_king_in_check(&outcome.board, moved.color)? {
        return Ok(None);
    }

    Ok(Some(outcome))
}

fn plan_move(
    game_state: &GameState,
    start: Square,
    end: Square,
    moved: Piece,
    config: &RulesConfig,
) -> Option<PlannedMove> {
    let board = &game_state.board;

    match movement_rule(moved.kind) {
        MovementRule::Sliding(directions) => plan_sliding(board, start, end, directions),
        MovementRule::Stepping(offsets) => plan_stepping(board, start, end, offsets).or_else(|| {
            if moved.kind == PieceKind::King {
                plan_castling(game_state, start, end, moved.color, config)
            } else {
                None
            }
        }),
        MovementRule::Pawn => plan_pawn_move(game_state, start, end, moved.color),
    }
}

fn plan_sliding(
    board: &Board,
    start: Square,
    end: Square,
    directions: &[Offset],
) -> Option<PlannedMove> {
    let (direction, steps) = sliding_direction(directions, displacement(start, end))?;
    if !is_path_clear(board, start, direction, steps) {
        return None;
    }
    Some(PlannedMove::plain(capture_or_quiet(board, end)))
}

fn plan_stepping(
    board: &Board,
    start: Square,
    end: Square,
    offsets: &[Offset],
) -> Option<PlannedMove> {
    let delta = displacement(start, end);
    if !offsets.contains(&delta) {
        return None;
    }
    Some(PlannedMove::plain(capture_or_quiet(board, end)))
}

#[inline]
fn capture_or_quiet(board: &Board, end: Square) -> MoveKind {
    if board.is_empty(end) {
        MoveKind::Quiet
    } else {
        MoveKind::Capture
    }
}
