//! Pattern decomposition - splits user input into search coordinates
//!
//! A raw completion pattern like `src/parser/mo` carries two jobs: the
//! directory to search in (`src/parser/`) and the text to rank results
//! against (`mo`). This module performs that split, resolves the directory
//! part to an absolute base directory, and keeps the unresolved directory
//! text verbatim so candidate labels can be reconstructed exactly as the
//! user typed them.
//!
//! It also owns the trigger-pattern check and the filler-token strip used
//! by the completion entry point.

use std::path::PathBuf;

use crate::utils::path;

/// Path separators recognized in user input.
const SEPARATORS: [char; 2] = ['/', '\\'];

/// Result of decomposing a raw input pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    /// Portion of the input after the last directory segment, used for
    /// fuzzy matching. Empty for trailing-separator input, which requests
    /// an unfiltered listing of the base directory.
    pub residual: String,

    /// Absolute, normalized directory the search is rooted at.
    pub base_dir: PathBuf,

    /// The directory portion of the input, verbatim and unresolved,
    /// prepended to result lines to form candidate labels. Empty iff the
    /// input had no path separator.
    pub display_prefix: String,
}

/// Decompose a raw pattern into (residual, base directory, display prefix).
///
/// The pattern is split at its last path separator. The directory part is
/// resolved to an absolute base directory; the basename part becomes the
/// residual fuzzy pattern.
///
/// Degenerate split policy: a pattern with no separator has no directory
/// part to resolve, so the entire pattern becomes the residual and the
/// search roots at the caller's current directory. Bare input like `mo`
/// therefore means "search here for mo".
///
/// # Arguments
/// * `pattern` - Raw input pattern, already stripped of any filler token
///
/// # Returns
/// * `Decomposition` - Search coordinates for the request
pub fn decompose(pattern: &str) -> Decomposition {
    let Some(idx) = pattern.rfind(SEPARATORS) else {
        // Degenerate split: no directory component. Whole input is the
        // residual, rooted at cwd, with no prefix to reattach to labels.
        return Decomposition {
            residual: pattern.to_string(),
            base_dir: path::current_dir(),
            display_prefix: String::new(),
        };
    };

    let dir_part = &pattern[..=idx];
    let residual = &pattern[idx + 1..];

    Decomposition {
        residual: residual.to_string(),
        base_dir: path::resolve(dir_part),
        display_prefix: dir_part.to_string(),
    }
}

/// Strip a single leading filler token from an argument lead.
///
/// The host command line starts with a one-character marker token (the
/// command the completion is attached to), which is not part of the path
/// pattern. The strip is shape-based: optional leading whitespace, one
/// non-whitespace character, then at least one whitespace character. Input
/// not matching that shape is returned unchanged, so bare paths pass
/// through.
///
/// # Arguments
/// * `lead` - Raw argument lead from the host
///
/// # Returns
/// * `&str` - The lead with the filler token removed, or the input as-is
pub fn strip_filler(lead: &str) -> &str {
    let trimmed = lead.trim_start();
    let mut chars = trimmed.char_indices();

    let Some((_, marker)) = chars.next() else {
        return lead;
    };
    if marker.is_whitespace() {
        return lead;
    }

    match chars.next() {
        Some((idx, c)) if c.is_whitespace() => trimmed[idx..].trim_start(),
        _ => lead,
    }
}

/// Check whether a command line matches the completion trigger: a leading
/// one-character filler token followed by a path-like token at the end of
/// input.
///
/// # Arguments
/// * `cmdline` - Full command line text
///
/// # Returns
/// * `bool` - True when the input should trigger path completion
pub fn matches_trigger(cmdline: &str) -> bool {
    let trimmed = cmdline.trim_start();
    let Some((marker, rest)) = trimmed.split_once(char::is_whitespace) else {
        return false;
    };

    marker.chars().count() == 1
        && !rest.trim_start().is_empty()
        && !cmdline.ends_with(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_separator_roots_at_cwd() {
        let d = decompose("mo");
        assert_eq!(d.residual, "mo");
        assert_eq!(d.base_dir, path::current_dir());
        assert_eq!(d.display_prefix, "");
    }

    #[test]
    fn test_empty_pattern() {
        let d = decompose("");
        assert_eq!(d.residual, "");
        assert_eq!(d.base_dir, path::current_dir());
        assert_eq!(d.display_prefix, "");
    }

    #[test]
    fn test_split_at_last_separator() {
        let d = decompose("src/parser/mo");
        assert_eq!(d.residual, "mo");
        assert_eq!(d.display_prefix, "src/parser/");
    }

    #[test]
    fn test_trailing_separator_yields_empty_residual() {
        let d = decompose("src/");
        assert_eq!(d.residual, "");
        assert_eq!(d.display_prefix, "src/");
    }

    #[test]
    fn test_root_pattern_resolves_to_root() {
        let d = decompose("/");
        assert_eq!(d.residual, "");
        assert_eq!(d.base_dir, PathBuf::from("/"));
        assert_eq!(d.display_prefix, "/");
    }

    #[test]
    fn test_absolute_pattern() {
        let d = decompose("/tmp/foo");
        assert_eq!(d.residual, "foo");
        assert_eq!(d.display_prefix, "/tmp/");
        assert!(d.base_dir.is_absolute());
    }

    #[test]
    fn test_backslash_separator() {
        let d = decompose("src\\mo");
        assert_eq!(d.residual, "mo");
        assert_eq!(d.display_prefix, "src\\");
    }

    #[test]
    fn test_prefix_preserved_verbatim() {
        // The display prefix keeps the user's spelling even though the
        // base dir is normalized.
        let d = decompose("./src/../src/mo");
        assert_eq!(d.display_prefix, "./src/../src/");
        assert_eq!(d.residual, "mo");
        assert!(!d.base_dir.to_string_lossy().contains(".."));
    }

    #[test]
    fn test_roundtrip_label_decomposes_to_same_base() {
        let tmp = std::env::temp_dir();
        let pattern = format!("{}/fu", tmp.display());
        let first = decompose(&pattern);

        // label = display_prefix + line; re-decomposing a label must land
        // in the same base directory.
        let label = format!("{}some-file.txt", first.display_prefix);
        let second = decompose(&label);
        assert_eq!(first.base_dir, second.base_dir);
    }

    #[test]
    fn test_strip_filler_basic() {
        assert_eq!(strip_filler("e src/fu"), "src/fu");
    }

    #[test]
    fn test_strip_filler_leading_whitespace() {
        assert_eq!(strip_filler("  e   src/fu"), "src/fu");
    }

    #[test]
    fn test_strip_filler_no_marker_passthrough() {
        assert_eq!(strip_filler("src/fu"), "src/fu");
        assert_eq!(strip_filler("edit src/fu"), "edit src/fu");
        assert_eq!(strip_filler(""), "");
    }

    #[test]
    fn test_strip_filler_marker_only() {
        // A lone marker with nothing after the whitespace strips to empty,
        // which decomposes to an unfiltered cwd listing.
        assert_eq!(strip_filler("e "), "");
    }

    #[test]
    fn test_matches_trigger() {
        assert!(matches_trigger("e src/fu"));
        assert!(matches_trigger("e /"));
        assert!(!matches_trigger("e "));
        assert!(!matches_trigger("src/fu"));
        assert!(!matches_trigger("edit src/fu x "));
        assert!(!matches_trigger(""));
    }
}
