//! Error handling module for pathcomp.
//!
//! This module provides error handling for the completion pipeline with:
//! - A search error taxonomy mirroring the pipeline's failure classes
//! - Configuration and I/O error kinds for the surrounding tooling
//! - A crate-wide `Result` alias
//!
//! Completion itself is total: the engine logs these kinds and returns an
//! empty candidate list instead of propagating them, so a completion host
//! never sees an error surface.

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, PathcompError, Result, SearchError};
