use scraper::{Html, Selector};
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, ScrapeError};
use crate::graph::GraphStore;

/// Pulls the bootstrap JSON out of the page's `__NEXT_DATA__` script
/// element. A page without the element, or with a syntactically broken
/// payload, is fatal for the run.
pub fn extract_bootstrap(html: &str) -> Result<Value> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("script#__NEXT_DATA__").unwrap();

    let script = document
        .select(&selector)
        .next()
        .ok_or(ScrapeError::MissingBootstrap)?;
    let raw = script.inner_html();
    debug!("bootstrap payload found, {} bytes", raw.len());

    serde_json::from_str(&raw).map_err(ScrapeError::MalformedBootstrap)
}

/// The normalized node map lives at `props.pageProps.apolloState`. A payload
/// without it is non-fatal and yields an empty store, so every field falls
/// back to its sentinel downstream.
pub fn graph_from_bootstrap(bootstrap: &Value) -> GraphStore {
    match bootstrap.pointer("/props/pageProps/apolloState") {
        Some(state) => GraphStore::from_state(state),
        None => GraphStore::default(),
    }
}
