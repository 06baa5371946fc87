//! Deck representation and the dealing round.
//!
//! ## Key Types
//!
//! - `Deck`: ordered cards, front first, with the original-order check
//! - `DeckPosition`: which end a card joins
//! - `RoundTransformer`: deals one table/bottom round in place

pub mod pile;
pub mod round;

pub use pile::{Deck, DeckPosition};
pub use round::RoundTransformer;
