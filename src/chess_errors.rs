//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type of the crate. Two families live in
//! it:
//! - input errors (malformed position text, malformed move requests) that a
//!   caller is expected to surface as a rejected request;
//! - `MissingKing`, an invariant violation meaning the game state is corrupt.
//!   It is propagated instead of guessing an answer and is not meant to be
//!   recovered from by normal library users.
//!
//! Illegal moves are not errors. They are reported as plain rejections by the
//! evaluator and the controller.

use thiserror::Error;

use crate::game_state::chess_types::Color;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Position text did not split into exactly six fields.
    #[error("position text must have 6 fields, found {0}")]
    InvalidFenFieldCount(usize),

    /// Board field did not contain exactly eight ranks.
    #[error("board layout must contain 8 ranks, found {0}")]
    InvalidFenRankCount(usize),

    /// A rank's pieces and empty runs did not add up to eight cells.
    ///
    /// Payload: (rank label as written in the text, counted cells).
    #[error("rank {rank} covers {cells} cells instead of 8")]
    InvalidFenRankWidth { rank: char, cells: usize },

    /// Character that is neither a piece letter, a digit `1..=8`, nor `/`.
    #[error("invalid character '{0}' in board layout")]
    InvalidFenToken(char),

    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),

    #[error("invalid castling rights character: {0}")]
    InvalidCastlingToken(char),

    /// Halfmove or fullmove field that is not a non-negative integer.
    #[error("invalid {field}: {value}")]
    InvalidCounter { field: &'static str, value: String },

    /// Square text such as `e3` that could not be interpreted.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicString(String),

    /// Move request that is neither `FRFR` digits nor `e2e4` style text.
    #[error("invalid move request: {0}")]
    InvalidMoveRequest(String),

    /// The board has no king of the given color.
    #[error("board does not contain a {0:?} king")]
    MissingKing(Color),
}

impl ChessErrors {
    /// True for errors caused by malformed caller input rather than corrupt state.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, ChessErrors::MissingKing(_))
    }
}

pub type ChessResult<T> = Result<T, ChessErrors>;
