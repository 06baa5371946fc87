//! Ordered deck of cards with a front and a back.
//!
//! The deck is a ring buffer (`VecDeque`) so cards can leave the front and
//! join either end in O(1), which is all a dealing round needs.
//!
//! ## Usage
//!
//! ```
//! use card_rounds::core::{CardCount, CardId};
//! use card_rounds::deck::Deck;
//!
//! let deck = Deck::new(CardCount::new(3).unwrap());
//!
//! assert_eq!(deck.front(), Some(CardId(1)));
//! assert_eq!(deck.back(), Some(CardId(3)));
//! assert!(deck.is_original_order());
//! ```

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{CardCount, CardId};

/// Where a card joins a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckPosition {
    /// Becomes the new front (top of a face-down pile).
    Top,
    /// Becomes the new back.
    Bottom,
}

/// An ordered sequence of cards, front first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<CardId>,
}

impl Deck {
    /// Create a deck holding cards `1..=count` with card 1 at the front.
    #[must_use]
    pub fn new(count: CardCount) -> Self {
        let mut cards = VecDeque::with_capacity(count.as_usize());
        cards.extend(count.ids());
        Self { cards }
    }

    /// Create an empty deck able to hold `capacity` cards without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: VecDeque::with_capacity(capacity),
        }
    }

    /// Build a deck from an explicit front-to-back order.
    ///
    /// No validation is performed; use [`Deck::has_each_card_once`] to check
    /// membership.
    pub fn from_order(order: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            cards: order.into_iter().collect(),
        }
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card at the front.
    #[must_use]
    pub fn front(&self) -> Option<CardId> {
        self.cards.front().copied()
    }

    /// The card at the back.
    #[must_use]
    pub fn back(&self) -> Option<CardId> {
        self.cards.back().copied()
    }

    /// Remove and return the front card.
    pub fn take_front(&mut self) -> Option<CardId> {
        self.cards.pop_front()
    }

    /// Add a card at the given end.
    pub fn place(&mut self, card: CardId, position: DeckPosition) {
        match position {
            DeckPosition::Top => self.cards.push_front(card),
            DeckPosition::Bottom => self.cards.push_back(card),
        }
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    /// Copy the order front to back.
    #[must_use]
    pub fn to_vec(&self) -> Vec<CardId> {
        self.iter().collect()
    }

    /// Check whether card `i` sits at position `i` for every card.
    ///
    /// An empty deck is never in original order.
    #[must_use]
    pub fn is_original_order(&self) -> bool {
        !self.cards.is_empty()
            && self
                .cards
                .iter()
                .enumerate()
                .all(|(position, card)| card.raw() as usize == position + 1)
    }

    /// Check that the deck holds exactly the cards `1..=len`, each once.
    #[must_use]
    pub fn has_each_card_once(&self) -> bool {
        let mut seen = vec![false; self.cards.len()];
        for card in &self.cards {
            let Some(slot) = (card.raw() as usize)
                .checked_sub(1)
                .and_then(|i| seen.get_mut(i))
            else {
                return false;
            };
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
            first = false;
        }
        Ok(())
    }
}
