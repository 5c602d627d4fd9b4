//! Sequential scraping of a refresh run's targets.

use std::time::Duration;

use hoard_core::{RatingSource, RatingTable, ScrapeTarget};
use serde::Serialize;

use crate::RatingFetcher;

/// A target whose rating could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeFailure {
    pub url: String,
    pub source: RatingSource,
    pub error: String,
}

/// Outcome of scraping a set of targets.
#[derive(Debug, Clone, Default)]
pub struct ScrapeReport {
    /// Ratings of every target that succeeded, keyed by target URL.
    pub ratings: RatingTable,
    pub failures: Vec<ScrapeFailure>,
    pub attempted: usize,
}

impl ScrapeReport {
    /// Share of attempted targets that failed; `0.0` for an empty run.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn failure_ratio(&self) -> f64 {
        if self.attempted == 0 {
            return 0.0;
        }
        self.failures.len() as f64 / self.attempted as f64
    }

    /// More than `threshold` of the targets failed. Usually means the sites
    /// changed their markup or blocked the requests.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn is_degraded(&self, threshold: f64) -> bool {
        self.attempted > 0 && self.failures.len() as f64 > self.attempted as f64 * threshold
    }
}

/// Scrape every target once, in order, pausing `delay` between requests.
///
/// A failing target is logged and recorded in the report; it never stops
/// the run. `on_progress` is called after each target with the number of
/// targets done so far.
pub async fn scrape_targets<F, P>(
    fetcher: &F,
    targets: &[ScrapeTarget],
    delay: Duration,
    mut on_progress: P,
) -> ScrapeReport
where
    F: RatingFetcher,
    P: FnMut(usize, &ScrapeTarget),
{
    let mut report = ScrapeReport {
        attempted: targets.len(),
        ..ScrapeReport::default()
    };

    for (index, target) in targets.iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match fetcher.fetch_rating(target).await {
            Ok(rating) => {
                tracing::debug!(
                    url = %target.url,
                    score = rating.score,
                    count = rating.count,
                    "scraped rating"
                );
                report.ratings.insert(target.url.clone(), rating);
            }
            Err(error) => {
                tracing::warn!(url = %target.url, source = %target.source, %error, "scrape failed");
                report.failures.push(ScrapeFailure {
                    url: target.url.clone(),
                    source: target.source,
                    error: error.to_string(),
                });
            }
        }

        on_progress(index + 1, target);
    }

    report
}
