//! Scraped ratings and their stored string form.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Ratings keyed by canonical page link.
pub type RatingTable = HashMap<String, Rating>;

/// Average score and number of ratings read from a book page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub score: f64,
    pub count: u64,
}

impl Rating {
    #[must_use]
    pub const fn new(score: f64, count: u64) -> Self {
        Self { score, count }
    }

    /// Score as stored in a book list: two decimals, trailing zeros and
    /// a trailing dot removed (`4.30` becomes `"4.3"`, `4.00` becomes `"4"`).
    #[must_use]
    pub fn formatted_score(&self) -> String {
        let fixed = format!("{:.2}", self.score);
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    }

    #[must_use]
    pub fn formatted_count(&self) -> String {
        self.count.to_string()
    }
}
