//! Round count from the cycle structure of a single round.
//!
//! Every round moves cards between positions in the same way, so a round is
//! a fixed permutation of positions. The deck is back in order after `k`
//! rounds exactly when `k` is a multiple of every cycle length, so the
//! answer is the LCM of the cycle lengths. One round is dealt instead of
//! all of them.

use crate::core::{CardCount, SimulationError};
use crate::deck::{Deck, RoundTransformer};

/// Position each card moves to after one round.
///
/// `result[p]` is where the card starting at position `p` ends up.
#[must_use]
pub fn round_permutation(cards: CardCount) -> Vec<usize> {
    let mut deck = Deck::new(cards);
    RoundTransformer::for_deck(&deck).apply(&mut deck);

    let mut moves = vec![0; deck.len()];
    for (position, card) in deck.iter().enumerate() {
        if let Some(home) = card.home_position() {
            moves[home] = position;
        }
    }
    moves
}

/// Lengths of the cycles of a permutation, in order of their smallest
/// position.
#[must_use]
pub fn cycle_lengths(permutation: &[usize]) -> Vec<usize> {
    let mut visited = vec![false; permutation.len()];
    let mut lengths = Vec::new();

    for start in 0..permutation.len() {
        if visited[start] {
            continue;
        }
        let mut len = 0;
        let mut at = start;
        while !visited[at] {
            visited[at] = true;
            at = permutation[at];
            len += 1;
        }
        lengths.push(len);
    }
    lengths
}

/// Number of rounds until `cards` cards return to original order.
///
/// Agrees with [`Simulator::run`](super::Simulator::run) for every deck
/// size, but fails with `RoundOverflow` where the count exceeds `u64`.
pub fn rounds_by_cycles(cards: CardCount) -> Result<u64, SimulationError> {
    cycle_lengths(&round_permutation(cards))
        .into_iter()
        .try_fold(1u64, |acc, len| checked_lcm(acc, len as u64))
        .ok_or(SimulationError::RoundOverflow { cards: cards.get() })
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn checked_lcm(a: u64, b: u64) -> Option<u64> {
    (a / gcd(a, b)).checked_mul(b)
}
