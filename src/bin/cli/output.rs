//! Output Formatting and Progress Display
//!
//! Text and JSON renderings of run summaries, the per-name tags printed while
//! fetching, and the progress bar that tracks `fetched / how_many`.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use townsplit_rs::{Classification, StopReason, Summary};

/// Report line for an outcome worth showing while streaming.
///
/// Outcomes that teach nothing (both-match, whole-word matches) are not shown.
pub fn tag_line(outcome: &Classification) -> Option<String> {
    match outcome {
        Classification::NewLeft { .. } | Classification::NewRight { .. } => outcome
            .learned()
            .map(|piece| format!("{}: {}", style(outcome.tag()).green().bold(), piece)),
        Classification::Unmatched { word } => {
            Some(format!("{}: {}", style(outcome.tag()).yellow().bold(), word))
        }
        Classification::BothMatch { .. } => None,
    }
}

/// Text report of a file-based run.
pub fn render_split_report(summary: &Summary) -> String {
    let mut out = String::new();
    for word in &summary.unmatched {
        out.push_str(&format!("{} NONE\n", word));
    }
    out.push_str(&format!("Found {} new left words\n", summary.new_left_count));
    out.push_str(&format!("Found {} new right words\n", summary.new_right_count));
    out
}

/// Text report of a fetch-based run.
pub fn render_fetch_report(summary: &Summary, fetched: usize, how_many: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("Fetched {} / {} names\n", fetched, how_many));
    out.push_str(&format!("Found {} new left words\n", summary.new_left_count));
    out.push_str(&format!("Found {} new right words\n", summary.new_right_count));
    out.push_str(&format!(
        "Unmatched ({}): {}\n",
        summary.unmatched.len(),
        summary.unmatched.join(", ")
    ));
    out
}

/// Short name for why a fetch run ended.
pub fn stop_label(stop: &StopReason) -> &'static str {
    match stop {
        StopReason::Completed => "completed",
        StopReason::Cancelled => "cancelled",
        StopReason::Exhausted => "exhausted",
        StopReason::Failed(_) => "failed",
    }
}

/// JSON shape of a fetch run.
#[derive(Serialize)]
pub struct FetchReport<'a> {
    /// Candidates classified
    pub fetched: usize,
    /// Candidates requested
    pub requested: usize,
    /// Why the run ended
    pub stopped: &'static str,
    /// Counters and unmatched names
    #[serde(flatten)]
    pub summary: &'a Summary,
}

/// Progress bar for streamed runs; hidden when quiet.
pub fn fetch_progress(how_many: usize, quiet: bool) -> anyhow::Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(how_many as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{bar:40.cyan/blue}] {pos}/{len} fetched ({eta})")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

/// Print a line to stdout above the progress bar.
///
/// The bar draws on stderr; it is cleared while the line is written so the
/// tags and the final report share stdout whether or not the bar is shown.
pub fn print_above(pb: &ProgressBar, line: &str) {
    pb.suspend(|| println!("{}", line));
}
