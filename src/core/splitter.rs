//! Prefix/suffix splitting of candidate town names.
//!
//! The [`Splitter`] owns the left and right vocabularies and grows them one
//! candidate at a time. A candidate that starts with a known left piece but
//! ends with no known right piece teaches a new right piece (the remainder
//! after the prefix), and vice versa. Candidates are processed strictly in
//! order: each classification sees every entry derived from earlier
//! candidates in the same run.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::core::errors::{Result, TownsplitError};
use crate::core::vocabulary::Vocabulary;

/// A trimmed, non-empty candidate name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateWord(String);

impl CandidateWord {
    /// Trim `raw`, returning `None` when nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The candidate text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CandidateWord {
    type Error = TownsplitError;

    fn try_from(raw: &str) -> Result<Self> {
        Self::new(raw).ok_or_else(|| TownsplitError::validation("candidate word is empty"))
    }
}

impl fmt::Display for CandidateWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of classifying one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Ends with a known right piece only; the rest is a left piece.
    NewLeft {
        /// The candidate
        word: String,
        /// Right piece the candidate ends with
        matched_right: String,
        /// Remainder before the matched suffix
        derived: String,
        /// Whether `derived` was added to the left vocabulary
        inserted: bool,
    },
    /// Starts with a known left piece only; the rest is a right piece.
    NewRight {
        /// The candidate
        word: String,
        /// Left piece the candidate starts with
        matched_left: String,
        /// Remainder after the matched prefix
        derived: String,
        /// Whether `derived` was added to the right vocabulary
        inserted: bool,
    },
    /// Matches neither vocabulary.
    Unmatched {
        /// The candidate
        word: String,
    },
    /// Already explained by both vocabularies; nothing is learned.
    BothMatch {
        /// The candidate
        word: String,
        /// Left piece the candidate starts with
        matched_left: String,
        /// Right piece the candidate ends with
        matched_right: String,
    },
}

impl Classification {
    /// Short report tag: `L`, `R`, `N` or `B`.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::NewLeft { .. } => "L",
            Self::NewRight { .. } => "R",
            Self::Unmatched { .. } => "N",
            Self::BothMatch { .. } => "B",
        }
    }

    /// The classified candidate.
    pub fn word(&self) -> &str {
        match self {
            Self::NewLeft { word, .. }
            | Self::NewRight { word, .. }
            | Self::Unmatched { word }
            | Self::BothMatch { word, .. } => word,
        }
    }

    /// The newly learned piece, if this outcome added one to a vocabulary.
    pub fn learned(&self) -> Option<&str> {
        match self {
            Self::NewLeft {
                derived,
                inserted: true,
                ..
            }
            | Self::NewRight {
                derived,
                inserted: true,
                ..
            } => Some(derived),
            _ => None,
        }
    }
}

/// Counters and leftovers of a splitting run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Left pieces added during the run
    pub new_left_count: usize,
    /// Right pieces added during the run
    pub new_right_count: usize,
    /// Candidates matching neither vocabulary, in input order
    pub unmatched: Vec<String>,
    /// Candidates explained by both vocabularies
    pub both_matched: usize,
    /// Candidates classified
    pub processed: usize,
}

/// Grows a pair of vocabularies from candidate names.
#[derive(Debug, Clone, Default)]
pub struct Splitter {
    left: Vocabulary,
    right: Vocabulary,
    summary: Summary,
}

impl Splitter {
    /// Create a splitter over the loaded vocabularies.
    pub fn new(left: Vocabulary, right: Vocabulary) -> Self {
        Self {
            left,
            right,
            summary: Summary::default(),
        }
    }

    /// Known left pieces.
    pub fn left(&self) -> &Vocabulary {
        &self.left
    }

    /// Known right pieces.
    pub fn right(&self) -> &Vocabulary {
        &self.right
    }

    /// Progress so far.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Give back the vocabularies and the final summary.
    pub fn into_parts(self) -> (Vocabulary, Vocabulary, Summary) {
        (self.left, self.right, self.summary)
    }

    /// Classify one candidate and grow the opposite vocabulary.
    pub fn classify(&mut self, candidate: &CandidateWord) -> Classification {
        let word = candidate.as_str();
        let matched_left = self.left.last_prefix_of(word).map(str::to_string);
        let matched_right = self.right.last_suffix_of(word).map(str::to_string);

        self.summary.processed += 1;

        let outcome = match (matched_left, matched_right) {
            (None, Some(matched_right)) => {
                let derived = word[..word.len() - matched_right.len()].to_string();
                let inserted = self.left.insert(derived.clone());
                if inserted {
                    self.summary.new_left_count += 1;
                }
                Classification::NewLeft {
                    word: word.to_string(),
                    matched_right,
                    derived,
                    inserted,
                }
            }
            (Some(matched_left), None) => {
                let derived = word[matched_left.len()..].to_string();
                let inserted = self.right.insert(derived.clone());
                if inserted {
                    self.summary.new_right_count += 1;
                }
                Classification::NewRight {
                    word: word.to_string(),
                    matched_left,
                    derived,
                    inserted,
                }
            }
            (None, None) => {
                self.summary.unmatched.push(word.to_string());
                Classification::Unmatched {
                    word: word.to_string(),
                }
            }
            (Some(matched_left), Some(matched_right)) => {
                self.summary.both_matched += 1;
                Classification::BothMatch {
                    word: word.to_string(),
                    matched_left,
                    matched_right,
                }
            }
        };

        debug!(word, tag = outcome.tag(), learned = ?outcome.learned(), "classified candidate");
        outcome
    }

    /// Trim `raw` and classify it, skipping blank input.
    pub fn classify_raw(&mut self, raw: &str) -> Option<Classification> {
        CandidateWord::new(raw).map(|candidate| self.classify(&candidate))
    }

    /// Classify every candidate in order.
    pub fn run<I, S>(&mut self, words: I) -> Summary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.run_with(words, |_| {})
    }

    /// Classify every candidate in order, reporting each outcome as it occurs.
    pub fn run_with<I, S, F>(&mut self, words: I, mut report: F) -> Summary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&Classification),
    {
        for raw in words {
            if let Some(outcome) = self.classify_raw(raw.as_ref()) {
                report(&outcome);
            }
        }
        self.summary.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(left: &[&str], right: &[&str]) -> Splitter {
        Splitter::new(
            Vocabulary::from_entries(left.iter().copied()),
            Vocabulary::from_entries(right.iter().copied()),
        )
    }

    fn word(raw: &str) -> CandidateWord {
        CandidateWord::new(raw).unwrap()
    }

    #[test]
    fn test_candidate_word_trims_and_rejects_blank() {
        assert_eq!(word("  jamestown\n").as_str(), "jamestown");
        assert!(CandidateWord::new(" \t ").is_none());
        assert!(CandidateWord::try_from("").is_err());
    }

    #[test]
    fn test_prefix_match_learns_right_piece() {
        let mut splitter = build(&["new"], &["ville"]);
        let outcome = splitter.classify(&word("newport"));

        assert_eq!(
            outcome,
            Classification::NewRight {
                word: "newport".to_string(),
                matched_left: "new".to_string(),
                derived: "port".to_string(),
                inserted: true,
            }
        );
        assert!(splitter.right().contains("port"));
        assert_eq!(splitter.summary().new_right_count, 1);
        assert_eq!(splitter.summary().new_left_count, 0);
    }

    #[test]
    fn test_suffix_match_learns_left_piece() {
        let mut splitter = build(&[], &["town"]);
        let outcome = splitter.classify(&word("jamestown"));

        assert_eq!(outcome.tag(), "L");
        assert_eq!(outcome.learned(), Some("james"));
        assert!(splitter.left().contains("james"));
        assert_eq!(splitter.summary().new_left_count, 1);
    }

    #[test]
    fn test_no_match_is_recorded() {
        let mut splitter = build(&["north"], &["south"]);
        let outcome = splitter.classify(&word("eastwest"));

        assert_eq!(
            outcome,
            Classification::Unmatched {
                word: "eastwest".to_string()
            }
        );
        assert_eq!(splitter.summary().unmatched, vec!["eastwest".to_string()]);
        assert_eq!(splitter.left().len(), 1);
        assert_eq!(splitter.right().len(), 1);
    }

    #[test]
    fn test_both_match_changes_nothing() {
        let mut splitter = build(&["a"], &["a"]);
        let before = (splitter.left().clone(), splitter.right().clone());

        let outcome = splitter.classify(&word("a"));

        assert!(matches!(outcome, Classification::BothMatch { .. }));
        assert_eq!(outcome.tag(), "B");
        assert_eq!((splitter.left().clone(), splitter.right().clone()), before);
        assert_eq!(splitter.summary().new_left_count, 0);
        assert_eq!(splitter.summary().new_right_count, 0);
        assert_eq!(splitter.summary().both_matched, 1);
        assert!(splitter.summary().unmatched.is_empty());
    }

    #[test]
    fn test_latest_prefix_decides_remainder() {
        let mut splitter = build(&["newp", "new"], &[]);
        let outcome = splitter.classify(&word("newport"));
        assert_eq!(outcome.learned(), Some("port"));

        let mut splitter = build(&["new", "newp"], &[]);
        let outcome = splitter.classify(&word("newport"));
        assert_eq!(outcome.learned(), Some("ort"));
    }

    #[test]
    fn test_whole_word_match_inserts_nothing() {
        let mut splitter = build(&[], &["bridge"]);
        let outcome = splitter.classify(&word("bridge"));

        assert_eq!(
            outcome,
            Classification::NewLeft {
                word: "bridge".to_string(),
                matched_right: "bridge".to_string(),
                derived: String::new(),
                inserted: false,
            }
        );
        assert!(splitter.left().is_empty());
        assert_eq!(splitter.summary().new_left_count, 0);
    }

    #[test]
    fn test_learned_piece_explains_later_candidates() {
        let mut splitter = build(&["new", "old"], &[]);
        splitter.classify(&word("newport"));
        let outcome = splitter.classify(&word("oldport"));

        // "oldport" now ends with the learned "port", so it is fully explained.
        assert!(matches!(outcome, Classification::BothMatch { .. }));
        assert_eq!(splitter.summary().new_right_count, 1);
    }

    #[test]
    fn test_run_depends_on_input_order() {
        let words = ["jamestown", "jamesville", "eastville"];

        let mut forward = build(&[], &["town"]);
        let summary = forward.run(words);
        assert_eq!(summary.new_left_count, 2);
        assert_eq!(summary.new_right_count, 1);
        assert!(forward.right().contains("ville"));
        assert!(forward.left().contains("east"));

        let mut reversed = build(&[], &["town"]);
        let summary = reversed.run(words.iter().rev());
        assert_eq!(summary.unmatched, vec!["eastville", "jamesville"]);
        assert!(!reversed.right().contains("ville"));
    }

    #[test]
    fn test_run_skips_blank_candidates() {
        let mut splitter = build(&["new"], &[]);
        let mut seen = Vec::new();
        let summary = splitter.run_with(["", "  newport  ", "\t"], |outcome| {
            seen.push(outcome.word().to_string())
        });

        assert_eq!(seen, vec!["newport"]);
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.new_right_count, 1);
    }

    #[test]
    fn test_into_parts_returns_grown_vocabularies() {
        let mut splitter = build(&["new"], &["town"]);
        splitter.run(["newport", "jamestown", "eastwest"]);
        let (left, right, summary) = splitter.into_parts();

        assert_eq!(left.iter().collect::<Vec<_>>(), vec!["new", "james"]);
        assert_eq!(right.iter().collect::<Vec<_>>(), vec!["town", "port"]);
        assert_eq!(summary.unmatched, vec!["eastwest"]);
        assert_eq!(summary.processed, 3);
    }

    #[test]
    fn test_deserialized_vocabulary_never_matches_everything() {
        let left: Vocabulary = serde_json::from_str(r#"["new", ""]"#).unwrap();
        let mut splitter = Splitter::new(left, Vocabulary::from_entries(["ville"]));

        let outcome = splitter.classify(&word("newport"));
        assert_eq!(
            outcome,
            Classification::NewRight {
                word: "newport".to_string(),
                matched_left: "new".to_string(),
                derived: "port".to_string(),
                inserted: true,
            }
        );
    }
}
