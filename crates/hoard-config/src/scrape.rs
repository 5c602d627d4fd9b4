//! Page scraping settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Identifies the refresh bot to the sites it reads.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; BookRatingsBot/1.0; +https://github.com/SelterDRG/book-table-data)";

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

const fn default_timeout_secs() -> u64 {
    25
}

const fn default_delay_secs() -> u64 {
    2
}

const fn default_failure_warn_ratio() -> f64 {
    0.3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapeConfig {
    /// `User-Agent` header sent with every page request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Pause between consecutive page requests, in seconds.
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,

    /// Share of failed pages above which a run is reported as degraded.
    #[serde(default = "default_failure_warn_ratio")]
    pub failure_warn_ratio: f64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            delay_secs: default_delay_secs(),
            failure_warn_ratio: default_failure_warn_ratio(),
        }
    }
}

impl ScrapeConfig {
    /// Reject values the scraper cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero timeout, an empty
    /// user agent, or a failure ratio outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(invalid("scrape.timeout_secs", "must be greater than zero"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(invalid("scrape.user_agent", "must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.failure_warn_ratio) {
            return Err(invalid(
                "scrape.failure_warn_ratio",
                "must be between 0.0 and 1.0",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
