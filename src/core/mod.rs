//! Core types: card identities, deck sizes, configuration, errors.
//!
//! Everything here is independent of how rounds are dealt; the `deck` and
//! `sim` modules build on these.

pub mod card;
pub mod config;
pub mod error;

pub use card::{CardCount, CardId};
pub use config::{SimulationConfig, Strategy};
pub use error::SimulationError;
