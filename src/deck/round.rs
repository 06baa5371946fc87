//! One dealing round: table a card, put the next one under.
//!
//! The deck being dealt is the hand. Each step moves the front card of the
//! hand onto the table pile and, if any cards remain, moves the new front
//! card to the bottom of the hand. When the hand runs out the table pile is
//! picked up as the new deck, top card first.
//!
//! ```
//! use card_rounds::core::{CardCount, CardId};
//! use card_rounds::deck::{Deck, RoundTransformer};
//!
//! let mut deck = Deck::new(CardCount::new(5).unwrap());
//! let mut transformer = RoundTransformer::for_deck(&deck);
//!
//! transformer.apply(&mut deck);
//! assert_eq!(deck.to_vec(), [2, 4, 5, 3, 1].map(CardId).to_vec());
//! ```

use super::pile::{Deck, DeckPosition};

/// Applies dealing rounds to a deck in place.
///
/// Holds the table pile between rounds so that repeated rounds reuse the
/// same two buffers.
#[derive(Clone, Debug, Default)]
pub struct RoundTransformer {
    table: Deck,
}

impl RoundTransformer {
    /// Create a transformer with no preallocated table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transformer whose table can hold all of `deck`.
    #[must_use]
    pub fn for_deck(deck: &Deck) -> Self {
        Self {
            table: Deck::with_capacity(deck.len()),
        }
    }

    /// Deal one full round, replacing `hand` with the resulting deck.
    pub fn apply(&mut self, hand: &mut Deck) {
        debug_assert!(self.table.is_empty());

        while let Some(card) = hand.take_front() {
            self.table.place(card, DeckPosition::Top);
            if let Some(next) = hand.take_front() {
                hand.place(next, DeckPosition::Bottom);
            }
        }

        // hand is now empty and becomes the next round's table
        std::mem::swap(hand, &mut self.table);
    }
}
