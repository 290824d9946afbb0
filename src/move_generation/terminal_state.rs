//! Terminal position detection.
//!
//! Answers check, checkmate and stalemate by asking the evaluator about every
//! `(own piece, board square)` pair until one is accepted. This is at most
//! 16 * 64 evaluations per color, which is plenty for a referee that runs it
//! once per committed move. Check is always resolved first so a board without
//! the queried king reports `MissingKing` instead of a guessed answer.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::rules_config::RulesConfig;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_evaluator::evaluate_square_move;

const BOARD_SQUARES: std::ops::Range<Square> = 0..64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl TerminalStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            TerminalStatus::Ongoing => "ongoing",
            TerminalStatus::Check => "check",
            TerminalStatus::Checkmate => "checkmate",
            TerminalStatus::Stalemate => "stalemate",
        }
    }
}

#[inline]
pub fn is_in_check(game_state: &GameState, color: Color) -> ChessResult<bool> {
    is_king_in_check(&game_state.board, color)
}

/// True as soon as any piece of `color` has an accepted destination.
pub fn has_any_legal_move(
    game_state: &GameState,
    color: Color,
    config: &RulesConfig,
) -> ChessResult<bool> {
    for start in game_state.board.occupied_squares(color) {
        for end in BOARD_SQUARES {
            if evaluate_square_move(game_state, start, end, true, config)?.is_some() {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

pub fn classify(
    game_state: &GameState,
    color: Color,
    config: &RulesConfig,
) -> ChessResult<TerminalStatus> {
    let in_check = is_in_check(game_state, color)?;
    let can_move = has_any_legal_move(game_state, color, config)?;

    Ok(match (in_check, can_move) {
        (true, true) => TerminalStatus::Check,
        (true, false) => TerminalStatus::Checkmate,
        (false, true) => TerminalStatus::Ongoing,
        (false, false) => TerminalStatus::Stalemate,
    })
}

#[inline]
pub fn is_checkmate(game_state: &GameState, color: Color, config: &RulesConfig) -> ChessResult<bool> {
    Ok(classify(game_state, color, config)? == TerminalStatus::Checkmate)
}

#[inline]
pub fn is_stalemate(game_state: &GameState, color: Color, config: &RulesConfig) -> ChessResult<bool> {
    Ok(classify(game_state, color, config)? == TerminalStatus::Stalemate)
}

pub fn is_game_over(game_state: &GameState, config: &RulesConfig) -> ChessResult<bool> {
    for color in [Color::Light, Color::Dark] {
        match classify(game_state, color, config)? {
            TerminalStatus::Checkmate | TerminalStatus::Stalemate => return Ok(true),
            TerminalStatus::Ongoing | TerminalStatus::Check => {}
        }
    }
    Ok(false)
}

/// Result from the rules alone. Draws by agreement, repetition or the
/// halfmove clock are left to whoever adjudicates the game.
pub fn game_result(game_state: &GameState, config: &RulesConfig) -> ChessResult<GameResult> {
    let light = classify(game_state, Color::Light, config)?;
    let dark = classify(game_state, Color::Dark, config)?;

    Ok(match (light, dark) {
        (TerminalStatus::Checkmate, _) => GameResult::DarkWins,
        (_, TerminalStatus::Checkmate) => GameResult::LightWins,
        (TerminalStatus::Stalemate, _) | (_, TerminalStatus::Stalemate) => GameResult::Draw,
        _ => GameResult::Undecided,
    })
}

/// Accepted destinations for the piece on `from`, whoever's turn it is.
pub fn legal_destinations(
    game_state: &GameState,
    from: Square,
    config: &RulesConfig,
) -> ChessResult<Vec<Square>> {
    let mut destinations = Vec::new();
    for end in BOARD_SQUARES {
        if evaluate_square_move(game_state, from, end, true, config)?.is_some() {
            destinations.push(end);
        }
    }
    Ok(destinations)
}

/// Every accepted `(start, end)` pair for `color`, in square order.
pub fn legal_moves(
    game_state: &GameState,
    color: Color,
    config: &RulesConfig,
) -> ChessResult<Vec<(Square, Square)>> {
    let mut moves = Vec::<(Square, Square)>::with_capacity(64);
    for start in game_state.board.occupied_squares(color) {
        for end in legal_destinations(game_state, start, config)? {
            moves.push((start, end));
        }
    }
    Ok(moves)
}
