//! Switches for the few rule details that deployments disagree on.

/// Rule options consulted by the move evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    /// Reject castling when the square the king passes over is attacked.
    ///
    /// Standard chess requires this. Turning it off reproduces older servers
    /// that only checked the king's start and destination squares.
    pub castling_transit_must_be_safe: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            castling_transit_must_be_safe: true,
        }
    }
}

impl RulesConfig {
    /// Configuration without the transit-square check.
    pub fn lenient_castling() -> Self {
        Self {
            castling_transit_must_be_safe: false,
        }
    }
}
