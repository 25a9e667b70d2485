//! Remote candidate source.
//!
//! The name generator answers each GET with a page of comma-separated names.
//! [`HttpBatchSource`] fetches one page per call and [`word_stream`] flattens
//! pages into a lazy, unbounded stream of trimmed words, retrying failed pages
//! according to a [`RetryPolicy`]. Callers bound the stream themselves.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use tracing::{debug, warn};
use url::Url;

use crate::core::config::FetchConfig;
use crate::core::errors::{Result, TownsplitError};

/// Lazy stream of candidate words; yields at most one error, then ends.
pub type WordStream<'a> = BoxStream<'a, Result<String>>;

/// Something that hands out pages of candidate names.
#[async_trait]
pub trait BatchSource: Send {
    /// Fetch the next page of names.
    async fn next_batch(&mut self) -> Result<Vec<String>>;

    /// Human-readable origin, used in logs and errors.
    fn describe(&self) -> String;
}

/// Split a page body into trimmed, non-empty names.
pub fn parse_batch(body: &str) -> Vec<String> {
    body.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// [`BatchSource`] backed by an HTTP name generator.
pub struct HttpBatchSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpBatchSource {
    /// Build a source for the configured endpoint and batch size.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut url = config.endpoint_url()?;
        url.query_pairs_mut()
            .append_pair(&config.batch_param, &config.batch_size.to_string());

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client, url })
    }

    /// The request URL, batch parameter included.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl BatchSource for HttpBatchSource {
    async fn next_batch(&mut self) -> Result<Vec<String>> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| TownsplitError::from(e).with_url(self.url.as_str()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(
                TownsplitError::fetch(format!("name generator answered {}", status))
                    .with_url(self.url.as_str()),
            );
        }

        let body = response
            .text()
            .await
            .map_err(|e| TownsplitError::from(e).with_url(self.url.as_str()))?;
        let batch = parse_batch(&body);
        debug!(url = %self.url, names = batch.len(), "fetched page");
        Ok(batch)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// How often a failed page is retried, and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first failure
    pub max_retries: u32,
    /// Pause between attempts
    pub delay: Duration,
}

impl RetryPolicy {
    /// Policy taken from the fetch configuration.
    pub fn from_config(config: &FetchConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            delay: config.retry_delay(),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&FetchConfig::default())
    }
}

/// Fetch one page, retrying transient failures and empty pages.
///
/// Errors that would repeat on every attempt are returned immediately.
pub async fn fetch_with_retry<S>(source: &mut S, policy: &RetryPolicy) -> Result<Vec<String>>
where
    S: BatchSource + ?Sized,
{
    let attempts = policy.max_retries.saturating_add(1);
    let mut attempt = 0;

    loop {
        attempt += 1;
        let error = match source.next_batch().await {
            Ok(batch) if !batch.is_empty() => return Ok(batch),
            Ok(_) => TownsplitError::fetch("name generator returned no names"),
            Err(err) => err,
        };

        if attempt >= attempts || !error.is_transient() {
            return Err(error.with_attempts(attempt));
        }

        warn!(
            source = %source.describe(),
            attempt,
            max_attempts = attempts,
            error = %error,
            "page fetch failed, retrying"
        );
        tokio::time::sleep(policy.delay).await;
    }
}

struct StreamState<S> {
    source: S,
    policy: RetryPolicy,
    buffered: VecDeque<String>,
    finished: bool,
}

/// Flatten a [`BatchSource`] into a lazy stream of words.
///
/// Pages are requested only when the previous one is used up. Once a page
/// cannot be fetched within the retry policy the error is yielded and the
/// stream ends.
pub fn word_stream<'a, S>(source: S, policy: RetryPolicy) -> WordStream<'a>
where
    S: BatchSource + 'a,
{
    let state = StreamState {
        source,
        policy,
        buffered: VecDeque::new(),
        finished: false,
    };

    stream::unfold(state, |mut state| async move {
        if state.finished {
            return None;
        }
        loop {
            if let Some(word) = state.buffered.pop_front() {
                return Some((Ok(word), state));
            }
            match fetch_with_retry(&mut state.source, &state.policy).await {
                Ok(batch) => state.buffered.extend(batch),
                Err(err) => {
                    state.finished = true;
                    return Some((Err(err), state));
                }
            }
        }
    })
    .boxed()
}
