//! Book list entries.
//!
//! A [`BookRecord`] wraps the JSON object of one entry rather than mapping it
//! onto a fixed struct: the lists carry editorial fields (series, tags, vendor
//! links, notes) that change over time, and a rewrite must keep every one of
//! them in its original position.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::RatingSource;
use crate::rating::Rating;

const TITLE: &str = "title";
const AUTHOR: &str = "author";
const URL: &str = "url";
const VENDORS: &str = "vendors";
const ROYAL_ROAD_VENDOR: &str = "rr";
const RATING: &str = "rating";
const RATING_COUNT: &str = "r_count";

/// One entry of a book list file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookRecord(Map<String, Value>);

impl BookRecord {
    #[must_use]
    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        non_empty_str(self.0.get(TITLE))
    }

    #[must_use]
    pub fn author(&self) -> Option<&str> {
        non_empty_str(self.0.get(AUTHOR))
    }

    /// Page the rating is read from.
    ///
    /// The primary `url` (a Goodreads page) wins; web serials without one fall
    /// back to their Royal Road vendor link. Records with neither are not
    /// rated by the refresh tool.
    #[must_use]
    pub fn rating_source(&self) -> Option<(RatingSource, &str)> {
        if let Some(url) = non_empty_str(self.0.get(URL)) {
            return Some((RatingSource::Goodreads, url));
        }

        let rr_url = self
            .0
            .get(VENDORS)
            .and_then(Value::as_object)
            .and_then(|vendors| vendors.get(ROYAL_ROAD_VENDOR))
            .and_then(Value::as_object)
            .and_then(|rr| non_empty_str(rr.get(URL)));

        rr_url.map(|url| (RatingSource::RoyalRoad, url))
    }

    /// Stored rating string, empty when absent.
    #[must_use]
    pub fn rating(&self) -> &str {
        self.0.get(RATING).and_then(Value::as_str).unwrap_or_default()
    }

    /// Stored rating count string, empty when absent.
    #[must_use]
    pub fn rating_count(&self) -> &str {
        self.0
            .get(RATING_COUNT)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Store `rating` in its string form.
    ///
    /// Returns `true` only if the stored rating or count changed. Fields that
    /// are not yet present are appended at the end of the object.
    pub fn apply_rating(&mut self, rating: &Rating) -> bool {
        let score = rating.formatted_score();
        let count = rating.formatted_count();

        if self.rating() == score && self.rating_count() == count {
            return false;
        }

        self.0.insert(RATING.to_string(), Value::String(score));
        self.0.insert(RATING_COUNT.to_string(), Value::String(count));
        true
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(value: Value) -> BookRecord {
        serde_json::from_value(value).expect("record should deserialize")
    }

    #[test]
    fn goodreads_url_takes_precedence() {
        let book = record(json!({
            "title": "Wyrmling",
            "url": "https://www.goodreads.com/book/show/1",
            "vendors": { "rr": { "url": "https://www.royalroad.com/fiction/1" } }
        }));
        assert_eq!(
            book.rating_source(),
            Some((RatingSource::Goodreads, "https://www.goodreads.com/book/show/1"))
        );
    }

    #[test]
    fn falls_back_to_royal_road_vendor() {
        let book = record(json!({
            "title": "Hoard Serial",
            "url": null,
            "vendors": { "rr": { "url": "https://www.royalroad.com/fiction/2" } }
        }));
        assert_eq!(
            book.rating_source(),
            Some((RatingSource::RoyalRoad, "https://www.royalroad.com/fiction/2"))
        );
    }

    #[test]
    fn empty_url_is_treated_as_missing() {
        let book = record(json!({
            "url": "",
            "vendors": { "rr": { "url": "" } }
        }));
        assert_eq!(book.rating_source(), None);
    }

    #[test]
    fn no_source_without_links() {
        let book = record(json!({ "title": "Unlinked", "vendors": {} }));
        assert_eq!(book.rating_source(), None);
        assert_eq!(book.title(), Some("Unlinked"));
        assert_eq!(book.author(), None);
    }

    #[test]
    fn apply_rating_reports_changes_only() {
        let mut book = record(json!({ "title": "A", "rating": "4.3", "r_count": "10" }));
        assert!(!book.apply_rating(&Rating::new(4.30, 10)));
        assert!(book.apply_rating(&Rating::new(4.31, 10)));
        assert_eq!(book.rating(), "4.31");
        assert!(book.apply_rating(&Rating::new(4.31, 11)));
        assert_eq!(book.rating_count(), "11");
    }

    #[test]
    fn apply_rating_replaces_non_string_values() {
        let mut book = record(json!({ "rating": 4.3, "r_count": 10 }));
        assert!(book.apply_rating(&Rating::new(4.3, 10)));
        assert_eq!(book.as_map()["rating"], json!("4.3"));
        assert_eq!(book.as_map()["r_count"], json!("10"));
    }

    #[test]
    fn apply_rating_keeps_field_order() {
        let mut book = record(json!({
            "title": "A",
            "rating": "",
            "r_count": "",
            "author": "B"
        }));
        book.apply_rating(&Rating::new(3.5, 2));
        let keys: Vec<&str> = book.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["title", "rating", "r_count", "author"]);
    }
}
