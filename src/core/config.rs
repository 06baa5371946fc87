//! Simulation configuration.
//!
//! The binary builds a `SimulationConfig` from command-line flags; library
//! users build one directly:
//!
//! ```
//! use card_rounds::core::{CardCount, SimulationConfig, Strategy};
//!
//! let config = SimulationConfig::new(CardCount::new(10).unwrap())
//!     .with_strategy(Strategy::Cycles)
//!     .with_trace(true);
//!
//! assert_eq!(config.cards.get(), 10);
//! ```

use serde::{Deserialize, Serialize};

use super::card::CardCount;

/// How the round count is obtained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Deal rounds one by one until the deck is back in order.
    #[default]
    Simulate,
    /// Deal a single round and take the LCM of the permutation's cycles.
    Cycles,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Simulate => write!(f, "simulate"),
            Strategy::Cycles => write!(f, "cycles"),
        }
    }
}

/// Parameters for one simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of cards in the deck.
    pub cards: CardCount,

    /// Solver used to produce the round count.
    pub strategy: Strategy,

    /// Log the full deck order after every simulated round.
    /// Has no effect with `Strategy::Cycles`.
    pub trace: bool,
}

impl SimulationConfig {
    /// Create a config for `cards` with default settings.
    #[must_use]
    pub fn new(cards: CardCount) -> Self {
        Self {
            cards,
            strategy: Strategy::default(),
            trace: false,
        }
    }

    /// Set the solver.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable per-round tracing.
    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::new(CardCount::new(5).unwrap());
        assert_eq!(config.strategy, Strategy::Simulate);
        assert!(!config.trace);
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::new(CardCount::new(5).unwrap())
            .with_strategy(Strategy::Cycles)
            .with_trace(true);

        assert_eq!(config.strategy, Strategy::Cycles);
        assert!(config.trace);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Simulate.to_string(), "simulate");
        assert_eq!(Strategy::Cycles.to_string(), "cycles");
    }

    #[test]
    fn test_config_serde() {
        let config = SimulationConfig::new(CardCount::new(52).unwrap())
            .with_strategy(Strategy::Cycles);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"cycles\""));

        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
