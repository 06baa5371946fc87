//! Card identities and validated deck sizes.
//!
//! Cards are numbered `1..=N`. A deck of N cards is described by a
//! [`CardCount`], which can only be built through validation so every
//! downstream operation may assume `1 <= N <= MAX`.
//!
//! ```
//! use card_rounds::core::{CardCount, CardId};
//!
//! let count = CardCount::new(52).unwrap();
//! assert_eq!(count.get(), 52);
//! assert_eq!(count.ids().next(), Some(CardId(1)));
//! ```

use serde::{Deserialize, Serialize};

use super::error::SimulationError;

/// Identity of a single card (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position this card occupies in the original order (0 = front).
    ///
    /// `None` for `CardId(0)`, which is never dealt.
    #[must_use]
    pub const fn home_position(self) -> Option<usize> {
        match self.0.checked_sub(1) {
            Some(index) => Some(index as usize),
            None => None,
        }
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of cards in a deck, guaranteed to lie in `1..=CardCount::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct CardCount(u32);

impl CardCount {
    /// Smallest accepted deck.
    pub const MIN: u32 = 1;

    /// Largest accepted deck (`2^31 - 1`).
    pub const MAX: u32 = i32::MAX as u32;

    /// Validate a deck size.
    pub fn new(count: u64) -> Result<Self, SimulationError> {
        if count < u64::from(Self::MIN) || count > u64::from(Self::MAX) {
            return Err(SimulationError::OutOfRange {
                value: count.to_string(),
            });
        }
        Ok(Self(count as u32))
    }

    /// Parse a base-10 deck size from a command-line argument.
    ///
    /// Anything that is not an integer is `NotAnInteger`; integers outside
    /// the accepted range (including negatives and values too large for any
    /// integer type) are `OutOfRange`.
    pub fn parse(input: &str) -> Result<Self, SimulationError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix(['+', '-'])
            .unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SimulationError::NotAnInteger {
                input: input.to_string(),
            });
        }

        match trimmed.parse::<i64>() {
            Ok(value) if value >= 0 => Self::new(value as u64),
            _ => Err(SimulationError::OutOfRange {
                value: trimmed.to_string(),
            }),
        }
    }

    /// Get the raw count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Count as a `usize` for buffer sizing.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Card identities in original order.
    pub fn ids(self) -> impl Iterator<Item = CardId> {
        (1..=self.0).map(CardId)
    }
}

impl TryFrom<u64> for CardCount {
    type Error = SimulationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CardCount> for u64 {
    fn from(count: CardCount) -> Self {
        u64::from(count.0)
    }
}

impl std::fmt::Display for CardCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
