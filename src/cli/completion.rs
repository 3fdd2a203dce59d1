//! Shell completion generation for the pathcomp binary
//!
//! Generates completion scripts for bash, zsh, and fish so the CLI's own
//! flags and subcommands complete in the user's shell.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::CliArgs;
use crate::error::{ConfigError, PathcompError, Result};

/// Generate a shell completion script on stdout.
///
/// # Arguments
/// * `shell_name` - Shell type (bash, zsh, fish)
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn generate_completion(shell_name: &str) -> Result<()> {
    let shell = parse_shell(shell_name)?;
    let mut cmd = CliArgs::command();
    generate(shell, &mut cmd, "pathcomp", &mut io::stdout());
    Ok(())
}

/// Parse shell name string to Shell enum
fn parse_shell(shell_name: &str) -> Result<Shell> {
    match shell_name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        _ => Err(PathcompError::Config(ConfigError::Generic(format!(
            "Unsupported shell: {}. Supported shells: bash, zsh, fish",
            shell_name
        )))),
    }
}
