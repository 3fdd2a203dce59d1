//! Completion engine - orchestrates the completion pipeline
//!
//! This module ties the pipeline together per request: strip the filler
//! token, decompose the pattern, validate the base directory, build and
//! run the lister command, and transform output into candidates.
//!
//! The operation is total. Every failure class - invalid base directory,
//! launch failure, non-zero exit, timeout - collapses to an empty
//! candidate list; a completion host never sees an error surface.

use std::sync::Arc;

use tracing::debug;

use crate::candidate::{self, Candidate, FuzzyScorer, SkimScorer};
use crate::command;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::pattern;
use crate::runner::{self, ProcessRunner};

/// One completion request as received from the host.
///
/// Created per trigger, immutable, discarded once the response is
/// returned.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Argument lead, possibly carrying a leading filler token.
    pub raw_arg_lead: String,

    /// Full command line the lead was taken from.
    pub full_cmdline: String,

    /// Whether the host forced the completion. Carried for diagnostics;
    /// the pipeline does not branch on it.
    pub is_forced: bool,
}

/// Main completion engine.
///
/// Holds the immutable search configuration and the injected runner and
/// scorer capabilities. Requests share nothing else, so one engine can
/// serve overlapping requests without locking.
pub struct CompletionEngine {
    /// Search configuration, read-only per invocation
    config: SearchConfig,
    /// Process execution capability
    runner: Arc<dyn ProcessRunner>,
    /// Fuzzy-scoring capability
    scorer: Arc<dyn FuzzyScorer>,
}

impl CompletionEngine {
    /// Create an engine from configuration, picking the runner mode the
    /// configuration asks for and the production scorer.
    ///
    /// # Arguments
    /// * `config` - Search configuration
    pub fn new(config: SearchConfig) -> Self {
        let runner = runner::for_config(&config);
        Self::with_parts(config, runner, Arc::new(SkimScorer::default()))
    }

    /// Create an engine with explicit runner and scorer capabilities.
    ///
    /// # Arguments
    /// * `config` - Search configuration
    /// * `runner` - Process execution capability
    /// * `scorer` - Fuzzy-scoring capability
    pub fn with_parts(
        config: SearchConfig,
        runner: Arc<dyn ProcessRunner>,
        scorer: Arc<dyn FuzzyScorer>,
    ) -> Self {
        Self {
            config,
            runner,
            scorer,
        }
    }

    /// Complete a partial path.
    ///
    /// Resolves within `timeout_millis` plus bounded overhead in the
    /// non-blocking mode; in blocking mode the call lasts as long as the
    /// lister does.
    ///
    /// # Arguments
    /// * `arg_lead` - Argument lead, possibly carrying a filler token
    /// * `full_cmdline` - Full command line text
    /// * `is_forced` - Whether the host forced the completion
    ///
    /// # Returns
    /// * `Vec<Candidate>` - Candidates in lister output order, empty on
    ///   any failure
    pub async fn complete(
        &self,
        arg_lead: &str,
        full_cmdline: &str,
        is_forced: bool,
    ) -> Vec<Candidate> {
        let request = CompletionRequest {
            raw_arg_lead: arg_lead.to_string(),
            full_cmdline: full_cmdline.to_string(),
            is_forced,
        };
        debug!(
            "completing lead={:?} forced={}",
            request.raw_arg_lead, request.is_forced
        );

        let lead = pattern::strip_filler(&request.raw_arg_lead);
        let decomposition = pattern::decompose(lead);

        // No process is spawned for a base directory that is not there.
        if !decomposition.base_dir.is_dir() {
            debug!(
                "{}",
                SearchError::InvalidBaseDirectory(
                    decomposition.base_dir.display().to_string()
                )
            );
            return Vec::new();
        }

        let args = command::build(&self.config, &decomposition.residual, &decomposition.base_dir);
        let lines = self
            .runner
            .run(&args, &decomposition.base_dir, self.config.timeout())
            .await;
        debug!("lister returned {} lines", lines.len());

        let hint = filter_hint(&request.full_cmdline, lead);
        candidate::build_candidates(
            &lines,
            &decomposition.base_dir,
            &decomposition.display_prefix,
            &decomposition.residual,
            &hint,
            self.scorer.as_ref(),
        )
    }

    /// Search configuration this engine was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Compute the per-request filter hint: the trailing substring of the
/// command line with the same length as the stripped argument lead.
fn filter_hint(full_cmdline: &str, stripped_lead: &str) -> String {
    let take = stripped_lead.len().min(full_cmdline.len());
    let start = full_cmdline.len() - take;
    full_cmdline
        .get(start..)
        .unwrap_or(stripped_lead)
        .to_string()
}
