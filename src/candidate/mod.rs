//! Candidate builder - turns raw lister output into completion candidates
//!
//! Each surviving output line becomes one [`Candidate`]: labeled with the
//! user's original directory prefix, annotated with the entry kind from a
//! non-throwing stat, and scored against the residual pattern. Lines the
//! scorer rejects are dropped entirely rather than emitted with a zero
//! score. Emission order follows input order; ranking by score is the
//! consuming completion engine's job.

use std::path::{Path, PathBuf};

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Serialize;
use tracing::trace;

use crate::utils::fs::{self, FileKind, StatInfo};

/// Score attached to every line when the residual pattern is empty and
/// the listing is unranked.
pub const UNRANKED_SCORE: i64 = 10;

/// Completion candidate kind shown to the host engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

/// Per-candidate metadata carried alongside the label.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateData {
    /// Absolute path of the entry.
    pub full_path: PathBuf,

    /// Stat result for the entry.
    pub stat: StatInfo,

    /// Fuzzy score, duplicated here for consumers that only read the data
    /// payload.
    pub score: i64,
}

/// One ranked completion suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    /// Display label: the user's directory prefix plus the result line.
    pub label: String,

    /// Entry kind, `None` when the stat capability could not classify it.
    pub kind: Option<CandidateKind>,

    /// Sortable fuzzy score. Higher is better; the host sorts descending.
    pub score: i64,

    /// Path, stat, and score metadata.
    pub data: CandidateData,

    /// Opaque string the host uses to suppress its own substring
    /// filtering, so fuzzy-matched results survive stricter prefix rules.
    pub filter_hint: String,
}

/// Fuzzy-scoring capability consumed by the candidate builder.
///
/// Implementations rank a candidate string against a pattern; `None`
/// means no match, and such lines are dropped from the output.
pub trait FuzzyScorer: Send + Sync {
    /// Score a single candidate string against the pattern.
    fn score(&self, pattern: &str, candidate: &str) -> Option<i64>;
}

/// Production scorer backed by the skim matching algorithm.
#[derive(Default)]
pub struct SkimScorer {
    matcher: SkimMatcherV2,
}

impl FuzzyScorer for SkimScorer {
    fn score(&self, pattern: &str, candidate: &str) -> Option<i64> {
        self.matcher.fuzzy_match(candidate, pattern)
    }
}

/// Map a stat kind to the candidate kind surfaced to the host.
fn candidate_kind(kind: FileKind) -> Option<CandidateKind> {
    match kind {
        FileKind::File => Some(CandidateKind::File),
        FileKind::Directory => Some(CandidateKind::Directory),
        FileKind::Other | FileKind::Unknown => None,
    }
}

/// Build completion candidates from raw lister output.
///
/// For each line: strip a leading `./`, skip empty lines, stat the full
/// path, and score against the residual. An empty residual gives every
/// surviving line the fixed [`UNRANKED_SCORE`]; otherwise lines the scorer
/// rejects are dropped.
///
/// # Arguments
/// * `lines` - Raw lister output lines, relative to `base_dir`
/// * `base_dir` - Directory the search was rooted at
/// * `display_prefix` - Directory portion of the user's input, verbatim
/// * `residual` - Residual fuzzy pattern
/// * `filter_hint` - Request-level hint attached verbatim to each candidate
/// * `scorer` - Fuzzy-scoring capability
///
/// # Returns
/// * `Vec<Candidate>` - Candidates in input order
pub fn build_candidates(
    lines: &[String],
    base_dir: &Path,
    display_prefix: &str,
    residual: &str,
    filter_hint: &str,
    scorer: &dyn FuzzyScorer,
) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(lines.len());

    for raw in lines {
        let line = raw.strip_prefix("./").unwrap_or(raw);
        if line.is_empty() {
            continue;
        }

        let score = if residual.is_empty() {
            UNRANKED_SCORE
        } else {
            match scorer.score(residual, line) {
                Some(score) => score,
                None => {
                    trace!("dropping unmatched line: {}", line);
                    continue;
                }
            }
        };

        let full_path = base_dir.join(line);
        let stat = fs::stat(&full_path);

        candidates.push(Candidate {
            label: format!("{display_prefix}{line}"),
            kind: candidate_kind(stat.kind),
            score,
            data: CandidateData {
                full_path,
                stat,
                score,
            },
            filter_hint: filter_hint.to_string(),
        });
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scorer stub with a fixed accept list.
    struct StubScorer(Vec<(&'static str, i64)>);

    impl FuzzyScorer for StubScorer {
        fn score(&self, _pattern: &str, candidate: &str) -> Option<i64> {
            self.0
                .iter()
                .find(|(name, _)| *name == candidate)
                .map(|(_, score)| *score)
        }
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_residual_fixed_score() {
        let input = lines(&["a.txt", "b.txt"]);
        let out = build_candidates(
            &input,
            Path::new("/tmp"),
            "",
            "",
            "",
            &StubScorer(Vec::new()),
        );

        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|c| c.score == UNRANKED_SCORE));
    }

    #[test]
    fn test_unmatched_lines_dropped() {
        let input = lines(&["func.rs", "bar.txt"]);
        let scorer = StubScorer(vec![("func.rs", 42)]);
        let out = build_candidates(&input, Path::new("/tmp"), "", "fu", "", &scorer);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label, "func.rs");
        assert_eq!(out[0].score, 42);
    }

    #[test]
    fn test_dot_slash_stripped() {
        let input = lines(&["./a.txt"]);
        let out = build_candidates(
            &input,
            Path::new("/tmp"),
            "src/",
            "",
            "",
            &StubScorer(Vec::new()),
        );

        assert_eq!(out[0].label, "src/a.txt");
        assert_eq!(out[0].data.full_path, PathBuf::from("/tmp/a.txt"));
    }

    #[test]
    fn test_empty_lines_skipped() {
        let input = lines(&["", "a.txt", "./"]);
        let out = build_candidates(
            &input,
            Path::new("/tmp"),
            "",
            "",
            "",
            &StubScorer(Vec::new()),
        );

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label, "a.txt");
    }

    #[test]
    fn test_filter_hint_attached_verbatim() {
        let input = lines(&["a.txt"]);
        let out = build_candidates(
            &input,
            Path::new("/tmp"),
            "",
            "",
            "src/fu",
            &StubScorer(Vec::new()),
        );

        assert_eq!(out[0].filter_hint, "src/fu");
    }

    #[test]
    fn test_emission_order_follows_input() {
        let input = lines(&["c.txt", "a.txt", "b.txt"]);
        let scorer = StubScorer(vec![("c.txt", 1), ("a.txt", 3), ("b.txt", 2)]);
        let out = build_candidates(&input, Path::new("/tmp"), "", "t", "", &scorer);

        let labels: Vec<_> = out.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["c.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_kind_from_stat() {
        let dir = std::env::temp_dir().join(format!("pathcomp-kind-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("sub")).unwrap();
        std::fs::write(dir.join("file.txt"), b"x").unwrap();

        let input = lines(&["file.txt", "sub", "missing.txt"]);
        let out = build_candidates(&input, &dir, "", "", "", &StubScorer(Vec::new()));
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(out[0].kind, Some(CandidateKind::File));
        assert_eq!(out[1].kind, Some(CandidateKind::Directory));
        assert_eq!(out[2].kind, None);
        assert_eq!(out[2].data.stat.kind, FileKind::Unknown);
    }

    #[test]
    fn test_skim_scorer_matches_subsequence() {
        let scorer = SkimScorer::default();
        assert!(scorer.score("fu", "func.rs").is_some());
        assert!(scorer.score("zzz", "func.rs").is_none());
    }
}
