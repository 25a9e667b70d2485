//! Insertion-ordered set of known name pieces.
//!
//! A [`Vocabulary`] holds either the known left pieces (town-name first
//! halves) or the known right pieces (second halves). Entries are unique and
//! never empty. Iteration follows insertion order: entries loaded from a word
//! list come first in file order, followed by every entry derived during a run
//! in the order it was found. Prefix and suffix lookups resolve ties in favour
//! of the most recently inserted entry.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Unique, insertion-ordered collection of name pieces.
///
/// Serialized as a plain list. Deserializing goes through
/// [`Vocabulary::from_entries`], so blank entries and repeats are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    entries: IndexSet<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from raw entries.
    ///
    /// Each entry is trimmed; blank entries and repeats are dropped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self::new();
        for entry in entries {
            vocabulary.insert(entry.as_ref().trim());
        }
        vocabulary
    }

    /// Insert an entry, returning `true` only if it was not already present.
    ///
    /// The empty string is never inserted.
    pub fn insert(&mut self, entry: impl Into<String>) -> bool {
        let entry = entry.into();
        if entry.is_empty() {
            return false;
        }
        self.entries.insert(entry)
    }

    /// Whether the entry is present.
    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocabulary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.iter().map(String::as_str)
    }

    /// Entry at the given insertion position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get_index(index).map(String::as_str)
    }

    /// Entries sorted lexicographically, as written to disk.
    pub fn sorted(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.iter().collect();
        sorted.sort_unstable();
        sorted
    }

    /// The most recently inserted entry that `word` starts with.
    ///
    /// Ties are settled by insertion order, not by match length.
    pub fn last_prefix_of(&self, word: &str) -> Option<&str> {
        self.iter().rev().find(|entry| word.starts_with(entry))
    }

    /// The most recently inserted entry that `word` ends with.
    pub fn last_suffix_of(&self, word: &str) -> Option<&str> {
        self.iter().rev().find(|entry| word.ends_with(entry))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_entries(iter)
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(entries: Vec<String>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.entries.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
