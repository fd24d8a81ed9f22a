//! Secretdump - dump Google Cloud Secret Manager secrets to a file.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secretdump::cli::output;
use secretdump::cli::{execute, Cli};
use secretdump::core::constants::LOG_ENV;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secretdump=debug")
        } else {
            EnvFilter::new("secretdump=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
