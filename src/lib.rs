//! Fuzzy Path Completion Library
//!
//! This library provides the core functionality of pathcomp: given a
//! partial filesystem path, resolve its base directory, run an external
//! recursive file lister scoped there, fuzzy-rank the output against the
//! remaining pattern, and return annotated completion candidates.
//!
//! # Modules
//!
//! - `candidate`: Candidate model, fuzzy scoring, line-to-candidate transform
//! - `cli`: Command-line interface and argument parsing
//! - `command`: External lister invocation builder
//! - `config`: Configuration management
//! - `engine`: Completion entry point orchestrating the pipeline
//! - `error`: Error types and handling
//! - `pattern`: Input pattern decomposition and trigger matching
//! - `runner`: Blocking and timeout-bounded process execution
//! - `utils`: Stat and path helpers
//!
//! # Example
//!
//! ```no_run
//! use pathcomp::{config::SearchConfig, engine::CompletionEngine};
//!
//! #[tokio::main]
//! async fn main() {
//!     let engine = CompletionEngine::new(SearchConfig::default());
//!     let candidates = engine.complete("src/mo", "e src/mo", false).await;
//!     for candidate in candidates {
//!         println!("{} ({})", candidate.label, candidate.score);
//!     }
//! }
//! ```

pub mod candidate;
pub mod cli;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use candidate::{Candidate, CandidateKind, FuzzyScorer, SkimScorer};
pub use config::{Config, SearchConfig};
pub use engine::{CompletionEngine, CompletionRequest};
pub use error::{PathcompError, Result};
pub use pattern::{decompose, matches_trigger, Decomposition};
pub use runner::ProcessRunner;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
