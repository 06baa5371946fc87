//! Logging setup for the binary.
//!
//! Events go to stderr so stdout carries only the result. The filter comes
//! from `RUST_LOG` when set, otherwise `warn`; `--trace` raises it to
//! `debug` so per-round deck orders are shown.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(trace: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if trace {
        filter = filter.add_directive(LevelFilter::DEBUG.into());
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
