//! Builds the snapshot that results from a geometrically valid move.
//!
//! The per-piece rule modules decide *whether* a displacement is possible and
//! describe it as a `PlannedMove`. This module turns the plan into a new board
//! plus the bookkeeping that rides along with it: castling rights, the
//! en-passant target and the halfmove clock. The input state is only read.

use crate::game_state::{board::Board, chess_rules::castling_right_for_corner, chess_types::*};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_king::{rook_squares, CastleSide};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture,
    /// Two-square pawn advance; `passed` becomes the en-passant target.
    DoublePawnPush { passed: Square },
    /// `captured` is the square of the pawn removed from the board.
    EnPassant { captured: Square },
    Castle(CastleSide),
}

impl MoveKind {
    #[inline]
    pub fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::EnPassant { .. })
    }
}

/// A displacement the piece rules accept, before king safety is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedMove {
    pub kind: MoveKind,
    pub promotion: Option<PieceKind>,
}

impl PlannedMove {
    #[inline]
    pub const fn plain(kind: MoveKind) -> Self {
        Self {
            kind,
            promotion: None,
        }
    }
}

/// Everything a caller needs to commit an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub start: Square,
    pub end: Square,
    /// The piece as it stood on `start`.
    pub moved: Piece,
    pub kind: MoveKind,
    pub promoted: bool,

    pub board: Board,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub halfmove_clock: u32,
}

pub fn apply_planned_move(
    game_state: &GameState,
    start: Square,
    end: Square,
    moved: Piece,
    plan: PlannedMove,
) -> MoveOutcome {
    let mut board = game_state.board;

    board.set_piece(start, None);
    let placed_kind = plan.promotion.unwrap_or(moved.kind);
    board.set_piece(end, Some(Piece::new(moved.color, placed_kind)));

    match plan.kind {
        MoveKind::EnPassant { captured } => board.set_piece(captured, None),
        MoveKind::Castle(side) => {
            let (rook_from, rook_to) = rook_squares(moved.color, side);
            let rook = board.take_piece(rook_from);
            board.set_piece(rook_to, rook);
        }
        _ => {}
    }

    let en_passant_square = match plan.kind {
        MoveKind::DoublePawnPush { passed } => Some(passed),
        _ => None,
    };

    let halfmove_clock = if moved.kind == PieceKind::Pawn || plan.kind.is_capture() {
        0
    } else {
        game_state.halfmove_clock.saturating_add(1)
    };

    MoveOutcome {
        start,
        end,
        moved,
        kind: plan.kind,
        promoted: plan.promotion.is_some(),
        board,
        castling_rights: updated_castling_rights(game_state.castling_rights, moved, start, end),
        en_passant_square,
        halfmove_clock,
    }
}

/// Next state after committing `outcome`: turn passes to the other side and the
/// fullmove number advances once the dark side has moved.
pub fn commit_outcome(game_state: &GameState, outcome: &MoveOutcome) -> GameState {
    let mover = outcome.moved.color;
    let fullmove_number = if mover == Color::Dark {
        game_state.fullmove_number.saturating_add(1)
    } else {
        game_state.fullmove_number
    };

    GameState {
        board: outcome.board,
        side_to_move: mover.opposite(),
        castling_rights: outcome.castling_rights,
        en_passant_square: outcome.en_passant_square,
        halfmove_clock: outcome.halfmove_clock,
        fullmove_number,
    }
}

/// Rights only ever lose bits here.
fn updated_castling_rights(
    rights: CastlingRights,
    moved: Piece,
    start: Square,
    end: Square,
) -> CastlingRights {
    let mut rights = rights;

    if moved.kind == PieceKind::King {
        rights &= !castling_rights_of(moved.color);
    }

    if moved.kind == PieceKind::Rook {
        if let Some(right) = castling_right_for_corner(start) {
            rights &= !right;
        }
    }

    // Capturing rook on original squares also removes rights.
    if let Some(right) = castling_right_for_corner(end) {
        rights &= !right;
    }

    rights
}
