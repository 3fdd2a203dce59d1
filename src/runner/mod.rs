//! Process runner - executes the external lister
//!
//! One capability trait, two implementations selected by configuration:
//!
//! - [`BlockingRunner`] spawns the lister synchronously and blocks the
//!   caller for its full duration.
//! - [`TimeoutRunner`] spawns through the async runtime and races the
//!   process against a hard timeout; on expiry the child is killed and
//!   the request yields nothing.
//!
//! Failure semantics are uniform: a missing tool, a non-zero exit, and a
//! timeout all degrade to an empty line vector, distinguishable only in
//! the log.

use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::config::SearchConfig;
use crate::error::SearchError;

/// Process execution capability for the completion pipeline.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run the lister command and return its stdout split into lines.
    ///
    /// # Arguments
    /// * `command` - Argument vector, program name first
    /// * `cwd` - Working directory for the child (the base directory)
    /// * `timeout` - Hard deadline; honored by the non-blocking runner
    ///
    /// # Returns
    /// * `Vec<String>` - Output lines, empty on any failure
    async fn run(&self, command: &[String], cwd: &Path, timeout: Duration) -> Vec<String>;
}

/// Pick the runner implementation the configuration asks for.
pub fn for_config(config: &SearchConfig) -> Arc<dyn ProcessRunner> {
    if config.blocking {
        Arc::new(BlockingRunner)
    } else {
        Arc::new(TimeoutRunner)
    }
}

/// Synchronous runner: blocks the calling context for the process's full
/// duration. The timeout parameter is not applied in this mode; callers
/// opt into unbounded waits with the `blocking` configuration flag.
pub struct BlockingRunner;

#[async_trait]
impl ProcessRunner for BlockingRunner {
    async fn run(&self, command: &[String], cwd: &Path, _timeout: Duration) -> Vec<String> {
        let Some((program, args)) = command.split_first() else {
            debug!("empty lister command, nothing to run");
            return Vec::new();
        };

        let output = std::process::Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output();

        match output {
            Ok(output) if output.status.success() => split_lines(&output.stdout),
            Ok(output) => {
                debug!("{}", SearchError::NonZeroExit(output.status.code()));
                Vec::new()
            }
            Err(e) => {
                debug!("{}", SearchError::LaunchFailed(format!("{program}: {e}")));
                Vec::new()
            }
        }
    }
}

/// Asynchronous runner: races the child against a hard deadline. A child
/// that outlives the deadline is killed and its partial output discarded;
/// a timed-out request always yields an empty result, never a truncated
/// one.
pub struct TimeoutRunner;

#[async_trait]
impl ProcessRunner for TimeoutRunner {
    async fn run(&self, command: &[String], cwd: &Path, timeout: Duration) -> Vec<String> {
        let Some((program, args)) = command.split_first() else {
            debug!("empty lister command, nothing to run");
            return Vec::new();
        };

        let mut cmd = tokio::process::Command::new(program);
        cmd.args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            // Dropping the output future on timeout must take the child
            // down with it.
            .kill_on_drop(true);

        match tokio::time::timeout(timeout, cmd.output()).await {
            Ok(Ok(output)) if output.status.success() => split_lines(&output.stdout),
            Ok(Ok(output)) => {
                debug!("{}", SearchError::NonZeroExit(output.status.code()));
                Vec::new()
            }
            Ok(Err(e)) => {
                debug!("{}", SearchError::LaunchFailed(format!("{program}: {e}")));
                Vec::new()
            }
            Err(_) => {
                debug!("{} after {:?}", SearchError::Timeout, timeout);
                Vec::new()
            }
        }
    }
}

/// Split captured stdout into owned lines.
fn split_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
