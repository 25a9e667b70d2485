//! Fetch-based splitting command.
//!
//! Streams candidates from the name generator into the splitter, showing
//! progress and per-name tags as it goes. Whatever way the stream ends
//! (limit reached, Ctrl-C, source failure) the grown word lists are saved and
//! the summary printed before the outcome is reported.

use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use indicatif::ProgressBar;
use tracing::info;

use crate::cli::args::FetchArgs;
use crate::cli::config_layer::build_fetch_config;
use crate::cli::output::{
    fetch_progress, print_above, render_fetch_report, stop_label, tag_line, FetchReport,
};
use townsplit_rs::io::fetch::{word_stream, HttpBatchSource, RetryPolicy};
use townsplit_rs::io::wordlist::{read_vocabulary, write_vocabulary_async};
use townsplit_rs::{
    run_stream, Classification, SessionLimits, SessionObserver, Splitter, StopReason,
};

/// Progress display and checkpoint writer for a fetch run
struct FetchReporter {
    progress: ProgressBar,
    quiet: bool,
    left_file: PathBuf,
    right_file: PathBuf,
}

impl FetchReporter {
    async fn save(&self, splitter: &Splitter) -> townsplit_rs::Result<()> {
        write_vocabulary_async(&self.left_file, splitter.left()).await?;
        write_vocabulary_async(&self.right_file, splitter.right()).await
    }
}

#[async_trait]
impl SessionObserver for FetchReporter {
    fn on_classified(&mut self, outcome: &Classification, fetched: usize) {
        self.progress.set_position(fetched as u64);
        if self.quiet {
            return;
        }
        if let Some(line) = tag_line(outcome) {
            print_above(&self.progress, &line);
        }
    }

    async fn on_checkpoint(&mut self, splitter: &Splitter) -> townsplit_rs::Result<()> {
        info!(processed = splitter.summary().processed, "checkpoint");
        self.save(splitter).await
    }
}

/// Resolves on Ctrl-C; never resolves if the handler cannot be installed
async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        futures::future::pending::<()>().await;
    }
}

/// Fetch, classify and persist `how_many` names
pub async fn fetch_command(args: FetchArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = build_fetch_config(config_path, &args)?;
    let paths = &args.vocabularies;

    let left = read_vocabulary(&paths.left_file)?;
    let right = read_vocabulary(&paths.right_file)?;

    let source = HttpBatchSource::new(&config.fetch)?;
    info!(url = %source.url(), how_many = args.how_many, "fetching candidates");
    let words = word_stream(source, RetryPolicy::from_config(&config.fetch));

    let quiet = args.quiet || args.json;
    let mut reporter = FetchReporter {
        progress: fetch_progress(args.how_many, quiet)?,
        quiet,
        left_file: paths.left_file.clone(),
        right_file: paths.right_file.clone(),
    };

    let mut splitter = Splitter::new(left, right);
    let limits = SessionLimits {
        how_many: args.how_many,
        checkpoint_every: config.output.checkpoint_every,
    };
    let outcome = run_stream(&mut splitter, words, limits, interrupted(), &mut reporter).await;
    reporter.progress.finish_and_clear();

    reporter
        .save(&splitter)
        .await
        .context("Failed to save word lists")?;

    let summary = splitter.summary();
    if args.json {
        let report = FetchReport {
            fetched: outcome.fetched,
            requested: args.how_many,
            stopped: stop_label(&outcome.stop),
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if matches!(outcome.stop, StopReason::Cancelled) {
            println!("Interrupted, partial progress saved");
        }
        print!(
            "{}",
            render_fetch_report(summary, outcome.fetched, args.how_many)
        );
    }

    match outcome.stop {
        StopReason::Failed(err) => Err(anyhow::Error::new(err)
            .context("Fetching stopped early; word lists hold the progress made so far")),
        _ => Ok(()),
    }
}
