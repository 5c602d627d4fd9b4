//! Link canonicalization.

/// Markers after which a link carries only referral or analytics data.
const TRACKING_MARKERS: [&str; 3] = ["/ref=", "?", "#"];

/// Strip tracking suffixes from a book link.
///
/// Everything from the first retailer `/ref=` marker, query string, or
/// fragment onward is removed, along with surrounding whitespace.
///
/// ```
/// use hoard_core::canonical_link;
///
/// assert_eq!(
///     canonical_link("https://www.amazon.com/dp/B0C1/ref=sr_1_1?keywords=dragon"),
///     "https://www.amazon.com/dp/B0C1",
/// );
/// ```
#[must_use]
pub fn canonical_link(url: &str) -> String {
    let url = url.trim();
    let end = TRACKING_MARKERS
        .iter()
        .filter_map(|marker| url.find(marker))
        .min()
        .unwrap_or(url.len());
    url[..end].to_string()
}
