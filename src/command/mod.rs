//! Search command builder - assembles the external lister invocation
//!
//! Builds the argument vector for the external file lister from the search
//! configuration, the residual pattern, and the resolved base directory.
//! Construction is pure: the configuration is never mutated and every call
//! produces a fresh vector.

use std::path::Path;

use crate::config::SearchConfig;

/// Programs known to take a recursion-depth flag we must clamp for
/// root-directory searches.
const DEPTH_LIMITED_LISTERS: [&str; 2] = ["fd", "fdfind"];

/// Depth forced when searching from the filesystem root, where a
/// full-depth scan would walk the entire filesystem.
const ROOT_DEPTH: &str = "1";

/// Build the lister invocation for one completion request.
///
/// Starts from the configured command verbatim. When the base directory is
/// the filesystem root and the program is a known depth-limited lister, any
/// `-d`/`--max-depth` flag (and its value) is replaced with depth 1. A
/// non-empty residual appends a loose fuzzy regex; the lister's own match
/// is kept permissive because definitive ranking happens in the scorer.
///
/// # Arguments
/// * `config` - Search configuration (read-only)
/// * `residual` - Residual fuzzy pattern, possibly empty
/// * `base_dir` - Resolved base directory for the search
///
/// # Returns
/// * `Vec<String>` - Fresh argument vector, program name first
pub fn build(config: &SearchConfig, residual: &str, base_dir: &Path) -> Vec<String> {
    let mut args = config.command.clone();

    if base_dir.parent().is_none() && is_depth_limited_lister(&args) {
        args = clamp_depth(args);
    }

    if !residual.is_empty() {
        args.push(loose_regex(residual));
    }

    args
}

/// Check whether the configured program is one of the known depth-limited
/// listers. The comparison uses the basename, so configured absolute paths
/// like `/usr/bin/fd` are recognized too.
fn is_depth_limited_lister(args: &[String]) -> bool {
    let Some(program) = args.first() else {
        return false;
    };
    Path::new(program)
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| DEPTH_LIMITED_LISTERS.contains(&name))
}

/// Replace any depth flag with a depth of 1.
fn clamp_depth(args: Vec<String>) -> Vec<String> {
    let mut clamped = Vec::with_capacity(args.len() + 2);
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        if arg == "-d" || arg == "--max-depth" {
            // Drop the flag together with its value argument
            iter.next();
        } else if arg.starts_with("--max-depth=") {
            // Inline form carries its value in the same argument
        } else {
            clamped.push(arg);
        }
    }

    clamped.push("--max-depth".to_string());
    clamped.push(ROOT_DEPTH.to_string());
    clamped
}

/// Build a loosely-fuzzy regex from the residual pattern: every character,
/// regex-escaped, followed by `.*`. `abc` becomes `a.*b.*c.*`, so the
/// lister returns a superset of what the scorer will keep.
fn loose_regex(residual: &str) -> String {
    let mut regex = String::with_capacity(residual.len() * 4);
    for c in residual.chars() {
        if is_regex_meta(c) {
            regex.push('\\');
        }
        regex.push(c);
        regex.push_str(".*");
    }
    regex
}

/// Characters with meaning in the lister's regex dialect, escaped so the
/// residual matches literally.
fn is_regex_meta(c: char) -> bool {
    matches!(
        c,
        '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|' | '\\'
    )
}
