//! Result of a solved deck.

use serde::{Deserialize, Serialize};

use crate::core::{CardCount, Strategy};

/// Outcome of one run, printable as text or JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Deck size.
    pub cards: CardCount,

    /// Rounds until the deck returned to original order.
    pub rounds: u64,

    /// Solver that produced `rounds`.
    pub strategy: Strategy,

    /// Wall time spent solving (microseconds).
    pub elapsed_us: u64,
}

impl SimulationReport {
    /// The line printed on success.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("Number of rounds: {}", self.rounds)
    }
}
