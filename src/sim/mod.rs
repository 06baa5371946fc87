//! Round counting: the step-by-step driver, the cycle solver, and the
//! entry point that picks between them.

pub mod cycles;
pub mod driver;
pub mod report;

use std::time::Instant;

use tracing::{debug, info};

pub use cycles::{cycle_lengths, round_permutation, rounds_by_cycles};
pub use driver::{SimState, Simulator};
pub use report::SimulationReport;

use crate::core::{SimulationConfig, SimulationError, Strategy};

/// Count the rounds for `config.cards` using the configured strategy.
///
/// With `trace` set and the `Simulate` strategy, the deck order after every
/// round is logged at DEBUG level.
pub fn solve(config: &SimulationConfig) -> Result<SimulationReport, SimulationError> {
    let started = Instant::now();

    let rounds = match config.strategy {
        Strategy::Simulate => {
            let mut sim = Simulator::new(config.cards);
            if config.trace {
                sim.run_with(|round, deck| {
                    debug!(round, order = %deck, "deck order");
                })
            } else {
                sim.run()
            }
        }
        Strategy::Cycles => rounds_by_cycles(config.cards)?,
    };

    let elapsed_us = started.elapsed().as_micros().try_into().unwrap_or(u64::MAX);
    info!(
        cards = config.cards.get(),
        rounds,
        strategy = %config.strategy,
        elapsed_us,
        "deck back in original order"
    );

    Ok(SimulationReport {
        cards: config.cards,
        rounds,
        strategy: config.strategy,
        elapsed_us,
    })
}
