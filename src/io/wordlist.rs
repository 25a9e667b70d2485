//! Word-list files: one entry per line, no header.
//!
//! Lines are trimmed on read and blank lines are ignored. Vocabularies are
//! written sorted, one entry per line, each followed by a newline.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::core::errors::{Result, TownsplitError};
use crate::core::vocabulary::Vocabulary;

/// Read the trimmed, non-blank lines of a word-list file in file order.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        TownsplitError::io(format!("Failed to read word list: {}", path.display()), e)
    })?;

    let lines: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    debug!(path = %path.display(), lines = lines.len(), "read word list");
    Ok(lines)
}

/// Load a vocabulary; repeated lines collapse into one entry.
pub fn read_vocabulary(path: &Path) -> Result<Vocabulary> {
    let vocabulary = Vocabulary::from_entries(read_lines(path)?);
    info!(path = %path.display(), entries = vocabulary.len(), "loaded vocabulary");
    Ok(vocabulary)
}

/// Load the candidate words of a run, keeping order and repeats.
pub fn read_candidates(path: &Path) -> Result<Vec<String>> {
    read_lines(path)
}

/// Render a vocabulary in its on-disk form.
pub fn render_vocabulary(vocabulary: &Vocabulary) -> String {
    let sorted = vocabulary.sorted();
    let mut out = String::with_capacity(sorted.iter().map(|entry| entry.len() + 1).sum());
    for entry in sorted {
        out.push_str(entry);
        out.push('\n');
    }
    out
}

/// Persist a vocabulary, replacing the file's previous contents.
pub fn write_vocabulary(path: &Path, vocabulary: &Vocabulary) -> Result<()> {
    fs::write(path, render_vocabulary(vocabulary)).map_err(|e| {
        TownsplitError::io(format!("Failed to write word list: {}", path.display()), e)
    })?;
    info!(path = %path.display(), entries = vocabulary.len(), "saved vocabulary");
    Ok(())
}

/// Persist a vocabulary without blocking the async runtime.
pub async fn write_vocabulary_async(path: &Path, vocabulary: &Vocabulary) -> Result<()> {
    tokio::fs::write(path, render_vocabulary(vocabulary))
        .await
        .map_err(|e| {
            TownsplitError::io(format!("Failed to write word list: {}", path.display()), e)
        })?;
    info!(path = %path.display(), entries = vocabulary.len(), "saved vocabulary");
    Ok(())
}
