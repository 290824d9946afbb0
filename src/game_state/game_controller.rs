//! The authoritative game.
//!
//! `ChessGame` owns the current `GameState` and the `RulesConfig` it is judged
//! under. State only changes through `load` or an accepted move, and both
//! replace the whole snapshot at once; a rejected move or bad position text
//! leaves the previous state exactly as it was.

use tracing::{debug, info, warn};

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::rules_config::RulesConfig;
use crate::move_generation::legal_move_apply::commit_outcome;
use crate::move_generation::legal_move_evaluator::evaluate_move;
use crate::move_generation::terminal_state::{
    self, classify, game_result, is_game_over, TerminalStatus,
};
use crate::utils::move_request::MoveRequest;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessGame {
    state: GameState,
    config: RulesConfig,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        Self {
            state: GameState::new_game(),
            config,
        }
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let mut game = Self::new();
        game.load(fen)?;
        Ok(game)
    }

    /// Replaces the whole state with the decoded position, or fails and keeps
    /// the current one.
    pub fn load(&mut self, fen: &str) -> ChessResult<()> {
        match GameState::from_fen(fen) {
            Ok(state) => {
                info!(fen, "position loaded");
                self.state = state;
                Ok(())
            }
            Err(err) => {
                warn!(fen, %err, "rejected position text");
                Err(err)
            }
        }
    }

    /// Back to the standard start position under the same rules.
    pub fn reset(&mut self) {
        self.state = GameState::new_game();
    }

    #[inline]
    pub fn serialize(&self) -> String {
        self.state.get_fen()
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    /// Commits `start -> end` for the side to move. `Ok(false)` means the move
    /// was illegal and nothing changed.
    pub fn try_move(&mut self, start: Coordinate, end: Coordinate) -> ChessResult<bool> {
        let Some(outcome) = evaluate_move(&self.state, start, end, false, &self.config)? else {
            debug!(?start, ?end, fen = %self.serialize(), "move rejected");
            return Ok(false);
        };

        debug!(
            start = outcome.start,
            end = outcome.end,
            kind = ?outcome.kind,
            promoted = outcome.promoted,
            "move accepted"
        );
        self.state = commit_outcome(&self.state, &outcome);
        Ok(true)
    }

    pub fn try_move_request(&mut self, text: &str) -> ChessResult<bool> {
        let request = MoveRequest::parse(text)?;
        self.try_move(request.start, request.end)
    }

    #[inline]
    pub fn is_check(&self, color: Color) -> ChessResult<bool> {
        terminal_state::is_in_check(&self.state, color)
    }

    #[inline]
    pub fn is_checkmate(&self, color: Color) -> ChessResult<bool> {
        terminal_state::is_checkmate(&self.state, color, &self.config)
    }

    #[inline]
    pub fn is_stalemate(&self, color: Color) -> ChessResult<bool> {
        terminal_state::is_stalemate(&self.state, color, &self.config)
    }

    pub fn is_game_over(&self) -> ChessResult<bool> {
        is_game_over(&self.state, &self.config)
    }

    pub fn status(&self) -> ChessResult<TerminalStatus> {
        classify(&self.state, self.state.side_to_move, &self.config)
    }

    pub fn result(&self) -> ChessResult<GameResult> {
        let result = game_result(&self.state, &self.config)?;
        if result != GameResult::Undecided {
            info!(?result, code = result.code(), "game decided");
        }
        Ok(result)
    }

    /// Legal `(start, end)` pairs for the side to move.
    pub fn legal_moves(&self) -> ChessResult<Vec<MoveRequest>> {
        let moves =
            terminal_state::legal_moves(&self.state, self.state.side_to_move, &self.config)?;
        Ok(moves
            .into_iter()
            .map(|(start, end)| MoveRequest::between(start, end))
            .collect())
    }

    pub fn render(&self) -> String {
        render_game_state(&self.state)
    }
}
