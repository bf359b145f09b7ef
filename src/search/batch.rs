//! Per-URL batch scraping without batch aborts.
//!
//! A failed URL becomes a failure record in the output instead of killing
//! the rest of the batch; the caller inspects outcomes afterwards.

use crate::error::{Result, ScraperError};
use serde::Serialize;

/// Outcome of scraping one URL in a batch
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum BatchOutcome<T> {
    /// The scraped payload
    Success(T),

    /// The scrape failed; the URL and error text are kept so the batch
    /// output stays aligned with its input
    Failure {
        url: String,
        error: String,
        success: bool,
    },
}

impl<T> BatchOutcome<T> {
    fn failure(url: &str, error: &ScraperError) -> Self {
        Self::Failure {
            url: url.to_string(),
            error: error.to_string(),
            success: false,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The payload, when there is one
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure { .. } => None,
        }
    }
}

/// Render a batch's outcomes as one JSON array, successes and failure
/// records side by side
pub fn to_json<T: Serialize>(outcomes: &[BatchOutcome<T>]) -> serde_json::Result<String> {
    serde_json::to_string(outcomes)
}

/// Apply `scrape` to each URL in order, converting per-URL errors into
/// failure records
pub fn scrape_each<'a, T, I, F>(urls: I, mut scrape: F) -> Vec<BatchOutcome<T>>
where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(&str) -> Result<T>,
{
    urls.into_iter()
        .map(|url| match scrape(url) {
            Ok(value) => BatchOutcome::Success(value),
            Err(err) => {
                log::warn!("scrape failed for {}: {}", url, err);
                BatchOutcome::failure(url, &err)
            }
        })
        .collect()
}
