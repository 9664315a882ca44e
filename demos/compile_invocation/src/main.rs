//! Builds a compiler invocation from command-line options and prints the
//! resulting argument vector.

use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use compile_invocation::cli::Cli;
use compile_invocation::error::{InvocationError, Result};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let args = cli.serializer().arguments(Some(&cli.to_configuration()?))?;
    let mut stdout = io::stdout().lock();
    if cli.diagnostic {
        writeln!(stdout, "{}", args.diagnostic()).map_err(InvocationError::Write)?;
    } else {
        for token in &args {
            writeln!(stdout, "{token}").map_err(InvocationError::Write)?;
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "compiler_args=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
