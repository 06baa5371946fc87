use std::io::{self, Write};

use anyhow::{Context, Result};

use card_rounds::cli::Invocation;
use card_rounds::logging::init_logging;

fn main() -> Result<()> {
    let invocation = Invocation::from_args(std::env::args_os());
    init_logging(invocation.trace_enabled());

    let mut stdout = io::stdout().lock();
    invocation
        .execute(&mut stdout)
        .and_then(|()| stdout.flush())
        .context("failed to write to stdout")?;
    Ok(())
}
