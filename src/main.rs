//! pathcomp - fuzzy path completion from the command line
//!
//! One-shot completion: decompose the given pattern, run the configured
//! file lister under the resolved base directory, fuzzy-rank the output,
//! and print the candidates.
//!
//! # Usage
//!
//! ```bash
//! # Complete entries under ./src ranked against "mo"
//! pathcomp src/mo
//!
//! # JSON output, synchronous lister
//! pathcomp --format json --blocking src/mo
//! ```

use tracing::Level;

mod candidate;
mod cli;
mod command;
mod config;
mod engine;
mod error;
mod pattern;
mod runner;
mod utils;

use cli::CliInterface;
use engine::CompletionEngine;
use error::Result;

/// Application entry point
#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle subcommands
/// 4. Run the completion and print candidates
///
/// # Returns
/// * `Result<()>` - Success or error
async fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand()? {
        return Ok(());
    }

    let Some(pattern) = cli.args().pattern.clone() else {
        return Err("missing PATTERN argument (try --help)".into());
    };

    let engine = CompletionEngine::new(cli.config().search.clone());

    // From the command line the pattern is both the argument lead and the
    // whole command line; there is no filler token to strip.
    let candidates = engine.complete(&pattern, &pattern, false).await;

    cli.print_candidates(candidates)
}

/// Initialize logging based on verbosity flags and configuration
fn initialize_logging(cli: &CliInterface) {
    let level = if cli.args().very_verbose {
        Level::TRACE
    } else if cli.args().verbose {
        Level::DEBUG
    } else {
        cli.config().logging.level.to_tracing_level()
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
