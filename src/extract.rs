use serde_json::Value;

use crate::graph::GraphStore;
use crate::locate::{self, Anchors};
use crate::normalize::{format_date, format_year, html_to_text, join_or_na, NA};
use crate::summary::BookSummary;

/// Cache key under which the page stores the pre-stripped description
/// variant, keyed exactly as the graph serializes the field arguments.
const STRIPPED_DESCRIPTION_KEY: &str = "description({\"stripped\":true})";

/// Character entries beyond this count are silently dropped.
const MAX_CHARACTERS: usize = 10;

/// Pulls every output field from the graph. Field failures stay local: a
/// missing anchor, a missing field, or an unresolvable reference falls back
/// to the sentinel (or drops the one list entry) instead of aborting the
/// extraction.
pub fn extract_summary(store: &GraphStore, book_id: Option<&str>) -> BookSummary {
    let Anchors { book, work, series } = locate::locate_anchors(store, book_id);

    let book_details = nested(book, "details");
    let work_details = nested(work, "details");
    let stats = nested(work, "stats");

    BookSummary {
        title: scalar_or_na(book, "title"),
        original_title: scalar_or_na(work_details, "originalTitle"),
        contributors: contributors(book, store),
        rating: scalar_or_na(stats, "averageRating"),
        ratings_count: scalar_or_na(stats, "ratingsCount"),
        reviews_count: scalar_or_na(stats, "textReviewsCount"),
        description: description(book),
        genres: genres(book),
        pages_count: scalar_or_na(book_details, "numPages"),
        book_format: scalar_or_na(book_details, "format"),
        first_publication_info: publication_date(work_details),
        publisher: scalar_or_na(book_details, "publisher"),
        publication_time: publication_date(book_details),
        literary_awards: literary_awards(work_details),
        setting: setting(work_details),
        characters: characters(work_details),
        image_url: scalar_or_na(book, "imageUrl"),
        series: scalar_or_na(series, "title"),
        isbn13: scalar_or_na(book_details, "isbn13"),
        isbn10: scalar_or_na(book_details, "isbn"),
        asin: scalar_or_na(book_details, "asin"),
        language: scalar_or_na(nested(book_details, "language"), "name"),
    }
}

/// Nested sub-object of an anchor, e.g. `details` or `stats`.
fn nested<'a>(node: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    node.and_then(|n| n.get(key)).filter(|v| v.is_object())
}

/// Direct scalar lookup keeping the raw JSON value; null counts as absent.
fn scalar_or_na(node: Option<&Value>, key: &str) -> Value {
    node.and_then(|n| n.get(key))
        .filter(|v| !v.is_null())
        .cloned()
        .unwrap_or_else(|| Value::String(NA.to_string()))
}

/// Timestamps arrive as integer or float epoch milliseconds.
fn epoch_ms(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value.as_f64().map(|f| f as i64)
}

fn publication_date(details: Option<&Value>) -> String {
    details
        .and_then(|d| d.get("publicationTime"))
        .and_then(epoch_ms)
        .filter(|ms| *ms > 0)
        .and_then(format_date)
        .unwrap_or_else(|| NA.to_string())
}

/// Prefers the pre-stripped description; falls back to converting the raw
/// HTML field to plain text.
fn description(book: Option<&Value>) -> String {
    let Some(book) = book else {
        return NA.to_string();
    };

    if let Some(stripped) = book.get(STRIPPED_DESCRIPTION_KEY).and_then(Value::as_str) {
        let trimmed = stripped.trim();
        return if trimmed.is_empty() {
            NA.to_string()
        } else {
            trimmed.to_string()
        };
    }

    match book.get("description").and_then(Value::as_str) {
        Some(raw) => {
            let text = html_to_text(raw);
            if text.is_empty() {
                NA.to_string()
            } else {
                text
            }
        }
        None => NA.to_string(),
    }
}

/// One reference hop from a contributor edge to the contributor's name.
fn contributor_name<'a>(edge: &Value, store: &'a GraphStore) -> Option<&'a str> {
    let node = edge.get("node")?;
    store.resolve(node)?.get("name")?.as_str()
}

/// Primary contributor first, then secondaries in edge order. Secondaries
/// that fail to resolve are dropped; a primary that fails to resolve blanks
/// the whole field, so secondaries never appear alone.
fn contributors(book: Option<&Value>, store: &GraphStore) -> String {
    let primary = book
        .and_then(|b| b.get("primaryContributorEdge"))
        .and_then(|edge| contributor_name(edge, store));
    let Some(primary) = primary else {
        return NA.to_string();
    };

    let mut names = vec![primary.to_string()];
    if let Some(edges) = book
        .and_then(|b| b.get("secondaryContributorEdges"))
        .and_then(Value::as_array)
    {
        for edge in edges {
            if let Some(name) = contributor_name(edge, store) {
                names.push(name.to_string());
            }
        }
    }
    names.join(", ")
}

fn genres(book: Option<&Value>) -> String {
    let names: Vec<String> = book
        .and_then(|b| b.get("bookGenres"))
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("genre")?.get("name")?.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    join_or_na(names)
}

/// "name (YYYY)" when the award carries a positive awarded timestamp, else
/// the bare name.
fn format_award(award: &Value) -> Option<String> {
    let name = award.get("name")?.as_str()?;
    let year = award
        .get("awardedAt")
        .and_then(epoch_ms)
        .filter(|ms| *ms > 0)
        .and_then(format_year);
    Some(match year {
        Some(year) => format!("{} ({})", name, year),
        None => name.to_string(),
    })
}

fn literary_awards(work_details: Option<&Value>) -> String {
    let formatted: Vec<String> = work_details
        .and_then(|d| d.get("awardsWon"))
        .and_then(Value::as_array)
        .map(|awards| awards.iter().filter_map(format_award).collect())
        .unwrap_or_default();
    join_or_na(formatted)
}

/// "name (country, year)" with either part independently omittable; bare
/// name when neither is present.
fn format_place(place: &Value) -> Option<String> {
    let name = place.get("name")?.as_str()?;

    let mut parts = Vec::new();
    if let Some(country) = place.get("countryName").and_then(Value::as_str) {
        if !country.is_empty() {
            parts.push(country.to_string());
        }
    }
    if let Some(year) = place.get("year").filter(|v| !v.is_null()) {
        let year = match year {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if !year.is_empty() {
            parts.push(year);
        }
    }

    Some(if parts.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, parts.join(", "))
    })
}

fn setting(work_details: Option<&Value>) -> String {
    let formatted: Vec<String> = work_details
        .and_then(|d| d.get("places"))
        .and_then(Value::as_array)
        .map(|places| places.iter().filter_map(format_place).collect())
        .unwrap_or_default();
    join_or_na(formatted)
}

fn characters(work_details: Option<&Value>) -> String {
    let names: Vec<String> = work_details
        .and_then(|d| d.get("characters"))
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .take(MAX_CHARACTERS)
                .filter_map(|c| c.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    join_or_na(names)
}
