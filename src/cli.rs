//! Command-line contract.
//!
//! ```text
//! card-rounds <N> [--strategy simulate|cycles] [--trace] [--json]
//! ```
//!
//! Every input problem prints a fixed message on stdout and the process
//! still exits with status 0:
//!
//! - missing N, or more than one argument that is not a known flag →
//!   `usage: <N cards>`
//! - N not an integer, including a lone argument that looks like a flag →
//!   `error - not an integer`
//! - N outside `1..=2147483647` → `usage: <N cards>`

use std::ffi::OsString;
use std::io::{self, Write};

use clap::{Parser, ValueEnum};

use crate::core::{CardCount, SimulationConfig, SimulationError, Strategy};
use crate::sim;

/// Printed when the argument list or the deck size is unusable.
pub const USAGE: &str = "usage: <N cards>";

/// Printed when N is not an integer.
pub const NOT_AN_INTEGER: &str = "error - not an integer";

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    Simulate,
    Cycles,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Simulate => Strategy::Simulate,
            StrategyArg::Cycles => Strategy::Cycles,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "card-rounds",
    disable_help_flag = true,
    disable_version_flag = true,
    about = "Count table/bottom dealing rounds until a deck of N cards is back in order"
)]
pub struct Args {
    /// Number of cards in the deck (1 to 2147483647)
    #[arg(allow_negative_numbers = true)]
    pub cards: String,

    /// How to count rounds
    #[arg(long, value_enum, default_value_t = StrategyArg::Simulate)]
    pub strategy: StrategyArg,

    /// Log the deck order after every round (stderr)
    #[arg(long)]
    pub trace: bool,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,
}

/// What the binary should do for a given argument list.
#[derive(Debug)]
pub enum Invocation {
    /// Solve a validated deck.
    Solve { config: SimulationConfig, json: bool },
    /// Print [`USAGE`].
    Usage,
    /// Print [`NOT_AN_INTEGER`].
    NotAnInteger,
}

impl Invocation {
    /// Resolve an argument list (including the program name).
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        let parsed = match Args::try_parse_from(&args) {
            Ok(parsed) => parsed,
            // A lone argument clap rejects (`-abc`, `--trace`) is a bad N.
            Err(_) if args.len() == 2 => return Invocation::NotAnInteger,
            Err(_) => return Invocation::Usage,
        };

        match CardCount::parse(&parsed.cards) {
            Ok(cards) => Invocation::Solve {
                config: SimulationConfig::new(cards)
                    .with_strategy(parsed.strategy.into())
                    .with_trace(parsed.trace),
                json: parsed.json,
            },
            Err(SimulationError::NotAnInteger { .. }) => Invocation::NotAnInteger,
            Err(_) => Invocation::Usage,
        }
    }

    /// Whether per-round tracing was requested.
    #[must_use]
    pub fn trace_enabled(&self) -> bool {
        matches!(self, Invocation::Solve { config, .. } if config.trace)
    }

    /// Carry out the invocation, writing all user-facing output to `out`.
    ///
    /// Only I/O errors on `out` are returned; input and solver problems are
    /// reported as text.
    pub fn execute<W: Write>(self, out: &mut W) -> io::Result<()> {
        match self {
            Invocation::Usage => writeln!(out, "{USAGE}"),
            Invocation::NotAnInteger => writeln!(out, "{NOT_AN_INTEGER}"),
            Invocation::Solve { config, json } => match sim::solve(&config) {
                Ok(report) if json => {
                    serde_json::to_writer(&mut *out, &report)?;
                    writeln!(out)
                }
                Ok(report) => writeln!(out, "{}", report.summary_line()),
                Err(err) => writeln!(out, "error - {err}"),
            },
        }
    }
}

/// Resolve `args` and execute, writing to `out`.
pub fn run<I, T, W>(args: I, out: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    Invocation::from_args(args).execute(out)
}
