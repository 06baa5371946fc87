//! Error types for deck validation and round counting.

use thiserror::Error;

/// Errors produced while validating input or solving for a round count.
///
/// Once a [`CardCount`](super::CardCount) exists, dealing and order checks
/// cannot fail; only the cycle solver can overflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The deck size argument is not a base-10 integer.
    #[error("not an integer: {input:?}")]
    NotAnInteger { input: String },

    /// The deck size is an integer outside `1..=2147483647`.
    #[error("card count out of range (got={value}, min=1, max=2147483647)")]
    OutOfRange { value: String },

    /// The round count does not fit in a `u64`.
    #[error("round count for {cards} cards overflows u64")]
    RoundOverflow { cards: u32 },
}
