use serde::Serialize;
use serde_json::Value;

/// Final output record for one book. The declaration order is the
/// serialization order and must not change.
///
/// Passthrough fields are kept as raw JSON values so numbers stay numbers
/// (ratings, page counts); normalized fields are plain strings. Every field
/// is always present, holding either a real value or the `"N/A"` sentinel.
#[derive(Debug, Serialize)]
pub struct BookSummary {
    pub title: Value,
    pub original_title: Value,
    pub contributors: String,
    pub rating: Value,
    pub ratings_count: Value,
    pub reviews_count: Value,
    pub description: String,
    pub genres: String,
    pub pages_count: Value,
    pub book_format: Value,
    pub first_publication_info: String,
    pub publisher: Value,
    pub publication_time: String,
    pub literary_awards: String,
    pub setting: String,
    pub characters: String,
    pub image_url: Value,
    pub series: Value,
    pub isbn13: Value,
    pub isbn10: Value,
    pub asin: Value,
    pub language: Value,
}
