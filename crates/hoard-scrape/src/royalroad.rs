//! Royal Road fiction page.

use std::sync::LazyLock;

use hoard_core::{Rating, RatingSource};
use regex::Regex;

use crate::error::ScrapeError;
use crate::html::{HtmlElement, HtmlPage, normalize_label, parse_decimal, parse_digits};

/// `4.67 stars` in the score badge's `aria-label`.
static STARS_LABEL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+(?:[.,][0-9]+)?)\s*stars").ok());

/// `4.67 / 5` in the score badge's `data-content` tooltip.
static OUT_OF_FIVE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:[.,][0-9]+)?)\s*/\s*5").ok());

const RATINGS_LABELS: [&str; 3] = ["ratings :", "ratings:", "ratings"];

/// Read the overall score and rating count from a Royal Road fiction page.
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
    let badge = page
        .by_tag("span")
        .find(|e| e.attr("aria-label").is_some_and(|label| label.contains("stars")))
        .ok_or_else(|| {
            ScrapeError::parse(RatingSource::RoyalRoad, "score span with aria-label not found")
        })?;

    let aria = badge.attr("aria-label").unwrap_or_default().trim();
    let data_content = badge.attr("data-content").unwrap_or_default().trim();

    capture_decimal(&STARS_LABEL, aria)
        .or_else(|| capture_decimal(&OUT_OF_FIVE, data_content))
        .ok_or_else(|| {
            ScrapeError::parse(
                RatingSource::RoyalRoad,
                format!(
                    "could not parse score from aria-label={aria:?} data-content={data_content:?}"
                ),
            )
        })
}

fn capture_decimal(pattern: &LazyLock<Option<Regex>>, text: &str) -> Option<f64> {
    let regex = pattern.as_ref()?;
    let captures = regex.captures(text)?;
    parse_decimal(captures.get(1)?.as_str())
}

fn parse_count(page: &HtmlPage) -> Result<u64, ScrapeError> {
    let mut items: Vec<&HtmlElement> = page
        .by_tag("li")
        .filter(|e| e.is_within("ul", "list-unstyled"))
        .collect();
    if items.is_empty() {
        items = page.by_tag("li").collect();
    }

    // The stats list alternates label and value items.
    for (index, item) in items.iter().enumerate() {
        let label = normalize_label(&item.text);
        if !RATINGS_LABELS.contains(&label.as_str()) {
            continue;
        }
        let Some(value) = items.get(index + 1) else {
            continue;
        };
        return parse_digits(&value.text).ok_or_else(|| {
            ScrapeError::parse(
                RatingSource::RoyalRoad,
                format!("could not parse ratings count from {:?}", value.text),
            )
        });
    }

    Err(ScrapeError::parse(
        RatingSource::RoyalRoad,
        "could not locate 'Ratings' count in stats list",
    ))
}
