//! Scrape error types.

use hoard_core::RatingSource;
use thiserror::Error;

/// Errors that can occur while fetching or reading a book page.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP transport error (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The site returned a non-success status code.
    #[error("{url} returned status {status}")]
    Status {
        /// HTTP status code returned by the site.
        status: u16,
        /// Requested page.
        url: String,
    },

    /// The site returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The page did not contain the expected rating markup.
    #[error("{site}: {message}")]
    Parse {
        site: RatingSource,
        message: String,
    },
}

impl ScrapeError {
    pub(crate) fn parse(site: RatingSource, message: impl Into<String>) -> Self {
        Self::Parse {
            site,
            message: message.into(),
        }
    }
}
