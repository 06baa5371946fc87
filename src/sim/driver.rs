//! Round-counting driver.
//!
//! A two-state machine. Starting in `Running` with the round counter at 1,
//! each step deals one round and checks the order: back in original order
//! moves to `Done`, anything else bumps the counter.
//!
//! No upper bound is imposed on the number of rounds. Some decks take a very
//! long time (313 cards need 1 575 169 365 rounds); use
//! [`rounds_by_cycles`](super::cycles::rounds_by_cycles) when only the count
//! matters.

use tracing::trace;

use crate::core::CardCount;
use crate::deck::{Deck, RoundTransformer};

/// Driver state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimState {
    /// Rounds are still being dealt.
    Running,
    /// The deck is back in original order.
    Done,
}

/// Deals rounds until the deck returns to its original order.
///
/// ## Usage
///
/// ```
/// use card_rounds::core::CardCount;
/// use card_rounds::sim::Simulator;
///
/// let mut sim = Simulator::new(CardCount::new(5).unwrap());
/// assert_eq!(sim.run(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Simulator {
    deck: Deck,
    transformer: RoundTransformer,
    round: u64,
    state: SimState,
}

impl Simulator {
    /// Create a driver over a freshly initialized deck of `cards` cards.
    #[must_use]
    pub fn new(cards: CardCount) -> Self {
        let deck = Deck::new(cards);
        let transformer = RoundTransformer::for_deck(&deck);
        Self {
            deck,
            transformer,
            round: 1,
            state: SimState::Running,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SimState {
        self.state
    }

    /// Current round counter.
    ///
    /// While running this is the round about to be dealt; once done it is
    /// the number of rounds it took.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    /// The deck as of the last dealt round.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Deal one round and check the order. Does nothing once done.
    pub fn step(&mut self) -> SimState {
        if self.state == SimState::Done {
            return self.state;
        }

        self.transformer.apply(&mut self.deck);

        if self.deck.is_original_order() {
            self.state = SimState::Done;
        } else {
            self.round += 1;
        }
        self.state
    }

    /// Deal rounds until done and return the round count.
    pub fn run(&mut self) -> u64 {
        self.run_with(|_, _| {})
    }

    /// Like [`run`](Self::run), calling `observer` with the round number and
    /// resulting deck after every round.
    pub fn run_with<F>(&mut self, mut observer: F) -> u64
    where
        F: FnMut(u64, &Deck),
    {
        while self.state == SimState::Running {
            let round = self.round;
            self.step();
            trace!(round, "dealt round");
            observer(round, &self.deck);
        }
        self.round
    }
}
