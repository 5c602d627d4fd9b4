//! Rating source enum.
//!
//! Serialized in lowercase, matching the identifiers used in CLI flags and
//! command output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Site a book's rating is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingSource {
    /// Goodreads book page (`url` field of a record).
    Goodreads,
    /// Royal Road fiction page (`vendors.rr.url` field of a record).
    RoyalRoad,
}

impl RatingSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Goodreads => "goodreads",
            Self::RoyalRoad => "royalroad",
        }
    }

    /// Infer the source from a page URL's host.
    ///
    /// Returns `None` for hosts other than Goodreads and Royal Road.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url);
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        let host = host.to_ascii_lowercase();

        if host == "goodreads.com" || host.ends_with(".goodreads.com") {
            Some(Self::Goodreads)
        } else if host == "royalroad.com" || host.ends_with(".royalroad.com") {
            Some(Self::RoyalRoad)
        } else {
            None
        }
    }
}

impl fmt::Display for RatingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingSource {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "goodreads" | "gr" => Ok(Self::Goodreads),
            "royalroad" | "rr" => Ok(Self::RoyalRoad),
            other => Err(CoreError::Validation(format!(
                "unknown rating source '{other}' (expected goodreads or royalroad)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://www.goodreads.com/book/show/123", Some(RatingSource::Goodreads))]
    #[case("http://goodreads.com/book/show/123", Some(RatingSource::Goodreads))]
    #[case("https://www.royalroad.com/fiction/456/wyrm", Some(RatingSource::RoyalRoad))]
    #[case("https://WWW.RoyalRoad.com/fiction/456", Some(RatingSource::RoyalRoad))]
    #[case("https://www.amazon.com/dp/B000/ref=sr_1", None)]
    #[case("https://notgoodreads.com/book", None)]
    fn infers_source_from_host(#[case] url: &str, #[case] expected: Option<RatingSource>) {
        assert_eq!(RatingSource::from_url(url), expected);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&RatingSource::RoyalRoad).unwrap();
        assert_eq!(json, "\"royalroad\"");
        let back: RatingSource = serde_json::from_str("\"goodreads\"").unwrap();
        assert_eq!(back, RatingSource::Goodreads);
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("rr".parse::<RatingSource>().unwrap(), RatingSource::RoyalRoad);
        assert_eq!("GoodReads".parse::<RatingSource>().unwrap(), RatingSource::Goodreads);
        assert!("amazon".parse::<RatingSource>().is_err());
    }
}
