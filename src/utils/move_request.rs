//! Move request text.
//!
//! Table servers send a move as four zero-based digits `FRFR` (start file,
//! start rank, end file, end rank), so `4143` is e2e4. Human-facing clients
//! send long algebraic `e2e4`. Both map onto a pair of coordinates; whether
//! the move is legal is the evaluator's business, not the parser's.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Coordinate, Square};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl MoveRequest {
    pub const fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    pub fn between(start: Square, end: Square) -> Self {
        Self::new(Coordinate::from(start), Coordinate::from(end))
    }

    pub fn parse(text: &str) -> ChessResult<Self> {
        let text = text.trim();
        let invalid = || ChessErrors::InvalidMoveRequest(text.to_owned());

        if text.len() != 4 || !text.is_ascii() {
            return Err(invalid());
        }

        if text.bytes().all(|b| b.is_ascii_digit()) {
            let digits: Vec<i8> = text.bytes().map(|b| (b - b'0') as i8).collect();
            if digits.iter().any(|d| *d > 7) {
                return Err(invalid());
            }
            return Ok(Self::new(
                Coordinate::new(digits[0], digits[1]),
                Coordinate::new(digits[2], digits[3]),
            ));
        }

        let start = algebraic_to_square(&text[..2]).map_err(|_| invalid())?;
        let end = algebraic_to_square(&text[2..]).map_err(|_| invalid())?;
        Ok(Self::between(start, end))
    }

    /// Long algebraic form, or `None` when a coordinate is off the board.
    pub fn to_long_algebraic(&self) -> Option<String> {
        let start = self.start.to_square()?;
        let end = self.end.to_square()?;
        Some(format!(
            "{}{}",
            square_to_algebraic(start),
            square_to_algebraic(end)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::MoveRequest;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Coordinate;

    #[test]
    fn digit_and_algebraic_forms_agree() {
        let digits = MoveRequest::parse("4143").expect("digit request should parse");
        let algebraic = MoveRequest::parse("e2e4").expect("algebraic request should parse");

        assert_eq!(digits, algebraic);
        assert_eq!(digits.start, Coordinate::new(4, 1));
        assert_eq!(digits.end, Coordinate::new(4, 3));
        assert_eq!(digits.to_long_algebraic().as_deref(), Some("e2e4"));
    }

    #[test]
    fn malformed_requests_are_rejected() {
        for text in ["", "e2e", "e2e44", "8143", "e2i4", "z1z2", "é2e4"] {
            assert_eq!(
                MoveRequest::parse(text),
                Err(ChessErrors::InvalidMoveRequest(text.to_owned()))
            );
        }
    }
}
