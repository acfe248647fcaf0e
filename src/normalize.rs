use chrono::{DateTime, Utc};
use scraper::Html;

/// Placeholder for any field whose value cannot be determined.
pub const NA: &str = "N/A";

/// Formats an epoch-millisecond timestamp as e.g. "January 01, 2021".
/// Always UTC, so the output does not depend on the host timezone.
pub fn format_date(epoch_ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms).map(|dt| dt.format("%B %d, %Y").to_string())
}

/// Four-digit calendar year of an epoch-millisecond timestamp, UTC.
pub fn format_year(epoch_ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms).map(|dt| dt.format("%Y").to_string())
}

/// Converts an HTML snippet to plain text. Markup is dropped, link targets
/// and images never contribute, visible text is kept with whitespace runs
/// collapsed to single spaces and the ends trimmed.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: Vec<&str> = fragment.root_element().text().collect();
    text.join("").split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Comma-joins a list of parts. An empty list yields the sentinel, never an
/// empty string.
pub fn join_or_na(items: Vec<String>) -> String {
    if items.is_empty() {
        NA.to_string()
    } else {
        items.join(", ")
    }
}
