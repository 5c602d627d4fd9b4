//! Scrape target planning.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::book::BookRecord;
use crate::enums::RatingSource;
use crate::link::canonical_link;

/// A page to scrape once per refresh run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScrapeTarget {
    /// Canonical link; also the key the scraped rating is stored under.
    pub url: String,
    pub source: RatingSource,
}

/// One target per distinct canonical link, in first-seen order.
///
/// The same book often appears in several lists; it is scraped once. When a
/// link shows up under two different sources, the first occurrence decides.
pub fn plan_targets<'a, I>(books: I) -> Vec<ScrapeTarget>
where
    I: IntoIterator<Item = &'a BookRecord>,
{
    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    for book in books {
        let Some((source, url)) = book.rating_source() else {
            continue;
        };
        let url = canonical_link(url);
        if url.is_empty() || !seen.insert(url.clone()) {
            continue;
        }
        targets.push(ScrapeTarget { url, source });
    }

    tracing::debug!(targets = targets.len(), "planned scrape targets");
    targets
}
