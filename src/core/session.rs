//! Streaming splitting session.
//!
//! Drives a [`Splitter`] over a [`WordStream`] until a requested number of
//! candidates has been processed, the stream fails or dries up, or the caller
//! cancels. Every way of stopping leaves the splitter in a coherent state, so
//! the vocabulary growth gathered so far can always be persisted.

use std::future::Future;

use async_trait::async_trait;
use futures::StreamExt;
use tracing::{info, warn};

use crate::core::errors::{Result, TownsplitError};
use crate::core::splitter::{Classification, Splitter};
use crate::io::fetch::WordStream;

/// Why a session stopped.
#[derive(Debug)]
pub enum StopReason {
    /// The requested number of candidates was processed.
    Completed,
    /// The caller cancelled.
    Cancelled,
    /// The source ran out of candidates before the limit.
    Exhausted,
    /// The source failed for good.
    Failed(TownsplitError),
}

/// Callbacks invoked while a session runs.
#[async_trait]
pub trait SessionObserver: Send {
    /// A candidate was classified; `fetched` counts candidates so far.
    fn on_classified(&mut self, _outcome: &Classification, _fetched: usize) {}

    /// A checkpoint is due; persist the current vocabularies.
    async fn on_checkpoint(&mut self, _splitter: &Splitter) -> Result<()> {
        Ok(())
    }
}

/// Result of a streaming session.
#[derive(Debug)]
pub struct SessionOutcome {
    /// Candidates pulled from the stream and classified
    pub fetched: usize,
    /// Why the session ended
    pub stop: StopReason,
}

/// Limits applied to a streaming session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Candidates to process before stopping
    pub how_many: usize,
    /// Checkpoint every N candidates (0 disables checkpoints)
    pub checkpoint_every: usize,
}

/// Classify candidates from `words` until a stop condition is met.
///
/// `cancel` resolves when the caller wants to stop early; it is checked before
/// every candidate. A checkpoint failure ends the session as a failure.
pub async fn run_stream<C, O>(
    splitter: &mut Splitter,
    mut words: WordStream<'_>,
    limits: SessionLimits,
    cancel: C,
    observer: &mut O,
) -> SessionOutcome
where
    C: Future<Output = ()>,
    O: SessionObserver + ?Sized,
{
    tokio::pin!(cancel);
    let mut fetched = 0;

    let stop = loop {
        if fetched >= limits.how_many {
            break StopReason::Completed;
        }

        let next = tokio::select! {
            biased;
            () = &mut cancel => {
                info!(fetched, "session cancelled");
                break StopReason::Cancelled;
            }
            next = words.next() => next,
        };

        let raw = match next {
            Some(Ok(raw)) => raw,
            Some(Err(err)) => {
                warn!(fetched, error = %err, "candidate source failed");
                break StopReason::Failed(err);
            }
            None => {
                info!(fetched, "candidate source exhausted");
                break StopReason::Exhausted;
            }
        };

        let Some(outcome) = splitter.classify_raw(&raw) else {
            continue;
        };
        fetched += 1;
        observer.on_classified(&outcome, fetched);

        if limits.checkpoint_every > 0 && fetched % limits.checkpoint_every == 0 {
            if let Err(err) = observer.on_checkpoint(splitter).await {
                break StopReason::Failed(err);
            }
        }
    };

    SessionOutcome { fetched, stop }
}
