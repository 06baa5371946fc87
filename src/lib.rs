//! # card-rounds
//!
//! Counts how many table/bottom dealing rounds it takes for a deck of N
//! cards to return to its original order.
//!
//! A round deals the whole deck: the front card goes onto a table pile, the
//! next card goes to the bottom of the hand, and so on until the hand is
//! empty. The table pile, top card first, is the deck for the next round.
//!
//! ## Modules
//!
//! - `core`: card identities, validated deck sizes, configuration, errors
//! - `deck`: the deck itself and the dealing round
//! - `sim`: the round-counting driver, the cycle solver, reports
//! - `cli`: argument handling and the output contract of the binary
//! - `logging`: `tracing` subscriber setup
//!
//! ## Example
//!
//! ```
//! use card_rounds::{solve, CardCount, SimulationConfig, Strategy};
//!
//! let config = SimulationConfig::new(CardCount::new(52).unwrap())
//!     .with_strategy(Strategy::Cycles);
//!
//! assert_eq!(solve(&config).unwrap().rounds, 510);
//! ```
//!
//! ## Resource use
//!
//! Memory is linear in N (two buffers of 4-byte card ids). The largest
//! accepted deck, 2^31 - 1 cards, needs about 16 GiB.

pub mod cli;
pub mod core;
pub mod deck;
pub mod logging;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{CardCount, CardId, SimulationConfig, SimulationError, Strategy};

pub use crate::deck::{Deck, DeckPosition, RoundTransformer};

pub use crate::sim::{rounds_by_cycles, solve, SimState, SimulationReport, Simulator};
