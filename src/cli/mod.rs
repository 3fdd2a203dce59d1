//! Command-line interface for pathcomp
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Flag-over-file override precedence
//! - Candidate output in text and JSON formats

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::candidate::Candidate;
use crate::config::Config;
use crate::error::Result;

pub mod completion;

/// Fuzzy path completion backed by an external file lister
#[derive(Parser, Debug)]
#[command(
    name = "pathcomp",
    version,
    about = "Fuzzy path completion backed by an external file lister",
    long_about = "Resolves a partial filesystem path to a base directory, runs a recursive \
file lister there, fuzzy-ranks the results against the rest of the pattern, and prints the \
completion candidates."
)]
pub struct CliArgs {
    /// Partial path pattern to complete
    ///
    /// Example: `pathcomp src/mo` lists entries under ./src ranked
    /// against "mo".
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Run the lister synchronously instead of racing it against the
    /// timeout
    #[arg(long)]
    pub blocking: bool,

    /// Hard timeout for the lister process
    #[arg(long, value_name = "MILLIS")]
    pub timeout_millis: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable trace logging
    #[arg(long)]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate shell completion scripts
    Completion {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One candidate per line: score, kind marker, label
    Text,
    /// JSON array of candidate objects
    Json,
}

/// CLI interface coupling parsed arguments with loaded configuration
pub struct CliInterface {
    args: CliArgs,
    config: Config,
}

impl CliInterface {
    /// Parse arguments, load configuration, and apply flag overrides.
    ///
    /// # Returns
    /// * `Result<Self>` - Interface ready for use, or a config error
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Build the interface from pre-parsed arguments.
    ///
    /// # Arguments
    /// * `args` - Parsed command-line arguments
    ///
    /// # Returns
    /// * `Result<Self>` - Interface ready for use, or a config error
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let mut config = Config::load_or_default(args.config_file.as_deref())?;

        // Command-line flags take precedence over the config file
        if args.blocking {
            config.search.blocking = true;
        }
        if let Some(timeout) = args.timeout_millis {
            config.search.timeout_millis = timeout;
        }

        Ok(Self { args, config })
    }

    /// Parsed command-line arguments.
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Effective configuration after overrides.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Config file path given on the command line, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.args.config_file.as_deref()
    }

    /// Handle subcommands that short-circuit the main flow.
    ///
    /// # Returns
    /// * `Result<bool>` - True when a subcommand was handled
    pub fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(CliCommand::Completion { shell }) => {
                completion::generate_completion(shell)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Print candidates in the selected output format.
    ///
    /// Candidates arrive in lister order; this consumer sorts them by
    /// score descending before printing, which is the ranking contract
    /// completion hosts are expected to apply.
    ///
    /// # Arguments
    /// * `candidates` - Candidates to print
    ///
    /// # Returns
    /// * `Result<()>` - Success or serialization error
    pub fn print_candidates(&self, mut candidates: Vec<Candidate>) -> Result<()> {
        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        match self.args.format {
            OutputFormat::Text => {
                for candidate in &candidates {
                    let marker = match candidate.kind {
                        Some(crate::candidate::CandidateKind::Directory) => "d",
                        Some(crate::candidate::CandidateKind::File) => "f",
                        None => "-",
                    };
                    println!("{}\t{}\t{}", candidate.score, marker, candidate.label);
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&candidates)
                    .map_err(|e| crate::error::PathcompError::Generic(e.to_string()))?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
