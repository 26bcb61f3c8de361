//! Automated build orchestrator for Keil uVision projects (uvb).
//!
//! Launches the uVision command-line build tool, streams its log file to
//! the terminal while the build runs, and copies the produced binary
//! images into the invoking directory afterwards.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uvb::builder::Builder;
use uvb::cli::Cli;
use uvb::commands::handle_build;
use uvb::prelude::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uvb=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    std::process::exit(run().await);
}

/// Parse arguments, run the pipeline and map the result to an exit code.
async fn run() -> i32 {
    let cli = Cli::parse();

    let builder = match Builder::create(cli) {
        Ok(builder) => builder,
        Err(err) => {
            error!("{err}");
            return err.exit_code();
        }
    };

    // Ctrl-C during the build reports a dedicated interrupted outcome;
    // dropping the pipeline kills the child, and the log file stays on
    // disk in whatever state the tool left it.
    let result = tokio::select! {
        result = handle_build(&builder) => result,
        _ = tokio::signal::ctrl_c() => Err(Error::Interrupted),
    };

    match result {
        Ok(outcome) => {
            info!("Done");
            outcome.exit_code()
        }
        Err(err) => {
            error!("{err}");
            err.exit_code()
        }
    }
}
