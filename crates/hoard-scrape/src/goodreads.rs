//! Goodreads book page.

use hoard_core::{Rating, RatingSource};

use crate::error::ScrapeError;
use crate::html::{HtmlPage, parse_decimal, parse_digits};

const RATING_CLASS: &str = "RatingStatistics__rating";
const COUNT_TEST_ID: &str = "ratingsCount";

/// Read the average rating and rating count from a Goodreads book page.
///
/// # Errors
///
/// Returns [`ScrapeError::Parse`] if either value is missing or unreadable.
pub fn parse_rating(html: &str) -> Result<Rating, ScrapeError> {
    let page = HtmlPage::parse(html);
    let score = parse_score(&page)?;
    let count = parse_count(&page)?;
    Ok(Rating::new(score, count))
}

fn parse_score(page: &HtmlPage) -> Result<f64, ScrapeError> {
    // Exact class token first, then any class containing it.
    let element = page
        .by_tag("div")
        .find(|e| e.has_class(RATING_CLASS))
        .or_else(|| page.by_tag("div").find(|e| e.class_contains(RATING_CLASS)))
        .ok_or_else(|| ScrapeError::parse(RatingSource::Goodreads, "rating element not found"))?;

    // The score may be split across inline tags (`4<span>.02</span>`).
    let text = element.joined_text("");
    parse_decimal(&text).ok_or_else(|| {
        ScrapeError::parse(
            RatingSource::Goodreads,
            format!("could not parse rating from {text:?}"),
        )
    })
}

fn parse_count(page: &HtmlPage) -> Result<u64, ScrapeError> {
    let element = page
        .by_tag("span")
        .find(|e| e.attr("data-testid") == Some(COUNT_TEST_ID))
        .ok_or_else(|| {
            ScrapeError::parse(RatingSource::Goodreads, "ratingsCount element not found")
        })?;

    parse_digits(&element.text).ok_or_else(|| {
        ScrapeError::parse(
            RatingSource::Goodreads,
            format!("could not parse ratings count from {:?}", element.text),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = include_str!("../tests/fixtures/goodreads.html");

    #[test]
    fn parses_book_page() {
        let rating = parse_rating(FIXTURE).unwrap();
        assert_eq!(rating, Rating::new(4.02, 131_553));
        assert_eq!(rating.formatted_score(), "4.02");
    }

    #[test]
    fn falls_back_to_class_substring() {
        let html = r#"<div class="RatingStatistics__rating--large">3,9</div>
            <span data-testid="ratingsCount">12 ratings</span>"#;
        assert_eq!(parse_rating(html).unwrap(), Rating::new(3.9, 12));
    }

    #[test]
    fn score_split_across_inline_tags() {
        let html = r#"<div class="RatingStatistics__rating">4<span>.02</span></div>
            <span data-testid="ratingsCount">5</span>"#;
        assert_eq!(parse_rating(html).unwrap(), Rating::new(4.02, 5));
    }

    #[test]
    fn missing_rating_element() {
        let err = parse_rating(r#"<span data-testid="ratingsCount">5</span>"#).unwrap_err();
        assert_eq!(err.to_string(), "goodreads: rating element not found");
    }

    #[test]
    fn missing_count_element() {
        let err = parse_rating(r#"<div class="RatingStatistics__rating">4.1</div>"#).unwrap_err();
        assert!(matches!(err, ScrapeError::Parse { site: RatingSource::Goodreads, .. }));
        assert!(err.to_string().contains("ratingsCount"));
    }

    #[test]
    fn unparsable_count() {
        let html = r#"<div class="RatingStatistics__rating">4.1</div>
            <span data-testid="ratingsCount">no ratings yet</span>"#;
        let err = parse_rating(html).unwrap_err();
        assert!(err.to_string().contains("could not parse ratings count"));
    }
}
