//! Simulation integration tests.
//!
//! These tests check the dealing round's invariants over many deck sizes and
//! cross-check the step-by-step driver against the cycle solver.

use card_rounds::core::{CardCount, SimulationConfig, Strategy};
use card_rounds::deck::{Deck, RoundTransformer};
use card_rounds::sim::{rounds_by_cycles, solve, SimState, Simulator};
use proptest::prelude::*;

fn count(n: u64) -> CardCount {
    CardCount::new(n).unwrap()
}

// =============================================================================
// Round Invariant Tests
// =============================================================================

/// Every round keeps exactly one copy of each card, for all decks up to 50.
#[test]
fn test_membership_preserved_every_round() {
    for n in 1..=50 {
        let mut sim = Simulator::new(count(n));
        sim.run_with(|round, deck| {
            assert_eq!(deck.len(), n as usize, "{n} cards, round {round}");
            assert!(deck.has_each_card_once(), "{n} cards, round {round}");
        });
    }
}

/// A single card is back in order after the first round.
#[test]
fn test_single_card() {
    let mut sim = Simulator::new(count(1));
    assert_eq!(sim.run(), 1);
}

/// Two cards swap on each round, so they need two rounds.
#[test]
fn test_two_cards() {
    let mut deck = Deck::new(count(2));
    let mut transformer = RoundTransformer::for_deck(&deck);

    transformer.apply(&mut deck);
    assert!(!deck.is_original_order());

    transformer.apply(&mut deck);
    assert!(deck.is_original_order());

    assert_eq!(Simulator::new(count(2)).run(), 2);
}

/// Checking the order twice without dealing gives the same answer.
#[test]
fn test_order_check_idempotent() {
    let mut sim = Simulator::new(count(12));
    while sim.state() == SimState::Running {
        let first = sim.deck().is_original_order();
        let second = sim.deck().is_original_order();
        assert_eq!(first, second);
        sim.step();
    }
    assert!(sim.deck().is_original_order());
}

// =============================================================================
// Driver Tests
// =============================================================================

/// The round counter goes up by exactly one per unsorted round.
#[test]
fn test_round_counter_monotonic() {
    let mut sim = Simulator::new(count(20));
    let mut last = sim.round();

    while sim.step() == SimState::Running {
        assert_eq!(sim.round(), last + 1);
        last = sim.round();
    }
    assert_eq!(sim.round(), last);
    assert_eq!(sim.round(), 20);
}

/// The driver and the cycle solver agree on every deck up to 100 cards.
#[test]
fn test_driver_matches_cycle_solver() {
    for n in 1..=100 {
        let simulated = Simulator::new(count(n)).run();
        let solved = rounds_by_cycles(count(n)).unwrap();
        assert_eq!(simulated, solved, "{n} cards");
    }
}

/// Every deck up to 1000 cards has a finite round count that fits in u64.
#[test]
fn test_all_decks_to_1000_terminate() {
    let mut largest = 0;
    for n in 1..=1000 {
        let rounds = rounds_by_cycles(count(n)).unwrap();
        assert!(rounds >= 1, "{n} cards");
        largest = largest.max(rounds);
    }
    assert_eq!(largest, 643_637_513_433_915);
}

// =============================================================================
// Solve Tests
// =============================================================================

#[test]
fn test_solve_strategies_agree() {
    for n in [1, 2, 7, 13, 52, 64] {
        let simulate = SimulationConfig::new(count(n));
        let cycles = SimulationConfig::new(count(n)).with_strategy(Strategy::Cycles);

        assert_eq!(
            solve(&simulate).unwrap().rounds,
            solve(&cycles).unwrap().rounds,
            "{n} cards"
        );
    }
}

#[test]
fn test_solve_deck_of_52() {
    let config = SimulationConfig::new(count(52));
    let report = solve(&config).unwrap();

    assert_eq!(report.rounds, 510);
    assert_eq!(report.summary_line(), "Number of rounds: 510");
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_round_preserves_membership(n in 1u64..=500, rounds in 1usize..=8) {
        let mut deck = Deck::new(count(n));
        let mut transformer = RoundTransformer::for_deck(&deck);

        for _ in 0..rounds {
            transformer.apply(&mut deck);
            prop_assert_eq!(deck.len(), n as usize);
            prop_assert!(deck.has_each_card_once());
        }
    }

    #[test]
    fn prop_first_card_tabled_ends_at_back(n in 1u64..=500) {
        let mut deck = Deck::new(count(n));
        RoundTransformer::for_deck(&deck).apply(&mut deck);

        // Card 1 is tabled first and ends at the bottom of the pile
        prop_assert_eq!(deck.back().map(|c| c.raw()), Some(1));
    }
}
