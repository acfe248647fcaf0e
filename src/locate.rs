use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::graph::GraphStore;

static BOOK_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"book/show/(\d+)").expect("valid book id pattern"));

/// Numeric book identifier from a `/book/show/<id>` path segment.
pub fn book_id_from_url(url: &str) -> Option<String> {
    BOOK_ID_RE.captures(url).map(|caps| caps[1].to_string())
}

/// Anchor records for the entities of interest. All three are optional: a
/// missing anchor defaults the fields derived from it instead of failing the
/// run.
#[derive(Debug, Default)]
pub struct Anchors<'a> {
    pub book: Option<&'a Value>,
    pub work: Option<&'a Value>,
    pub series: Option<&'a Value>,
}

fn type_tag(node: &Value) -> Option<&str> {
    node.get("__typename").and_then(Value::as_str)
}

/// Heuristic anchor selection over the node map, first match wins.
///
/// The Book node is the one whose `webUrl` contains the numeric book id;
/// Work and Series are matched on their type tag alone. A payload may hold
/// several Work or Series nodes; the first in document order is kept.
pub fn locate_anchors<'a>(store: &'a GraphStore, book_id: Option<&str>) -> Anchors<'a> {
    let mut anchors = Anchors::default();
    for (key, node) in store.entries() {
        match type_tag(node) {
            Some("Book") if anchors.book.is_none() => {
                if let Some(id) = book_id {
                    let web_url = node.get("webUrl").and_then(Value::as_str).unwrap_or("");
                    if web_url.contains(id) {
                        debug!("book anchor selected: {}", key);
                        anchors.book = Some(node);
                    }
                }
            }
            Some("Work") if anchors.work.is_none() => anchors.work = Some(node),
            Some("Series") if anchors.series.is_none() => anchors.series = Some(node),
            _ => {}
        }
    }
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn book_id_extracted_from_show_path() {
        let url = "https://www.goodreads.com/book/show/13651-the-dispossessed";
        assert_eq!(book_id_from_url(url), Some("13651".to_string()));
    }

    #[test]
    fn book_id_absent_for_other_paths() {
        assert_eq!(book_id_from_url("https://www.goodreads.com/author/show/7"), None);
    }

    #[test]
    fn book_anchor_requires_matching_web_url() {
        let store = GraphStore::from_state(&json!({
            "Book:other": {"__typename": "Book", "webUrl": "https://example.com/book/show/999-x"},
            "Book:wanted": {"__typename": "Book", "webUrl": "https://example.com/book/show/42-y"},
        }));

        let anchors = locate_anchors(&store, Some("42"));
        assert_eq!(anchors.book.unwrap()["webUrl"], "https://example.com/book/show/42-y");
    }

    #[test]
    fn no_book_id_means_no_book_anchor() {
        let store = GraphStore::from_state(&json!({
            "Book:1": {"__typename": "Book", "webUrl": "https://example.com/book/show/1-a"},
        }));

        let anchors = locate_anchors(&store, None);
        assert!(anchors.book.is_none());
    }

    #[test]
    fn first_work_and_series_win() {
        let store = GraphStore::from_state(&json!({
            "Work:1": {"__typename": "Work", "details": {"originalTitle": "first"}},
            "Work:2": {"__typename": "Work", "details": {"originalTitle": "second"}},
            "Series:1": {"__typename": "Series", "title": "first series"},
            "Series:2": {"__typename": "Series", "title": "second series"},
        }));

        let anchors = locate_anchors(&store, None);
        assert_eq!(anchors.work.unwrap()["details"]["originalTitle"], "first");
        assert_eq!(anchors.series.unwrap()["title"], "first series");
    }

    #[test]
    fn missing_series_is_valid() {
        let store = GraphStore::from_state(&json!({
            "Work:1": {"__typename": "Work"},
        }));

        let anchors = locate_anchors(&store, Some("1"));
        assert!(anchors.series.is_none());
        assert!(anchors.work.is_some());
    }
}
