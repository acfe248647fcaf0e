use book_scraper::error::ScrapeError;
use book_scraper::payload::{extract_bootstrap, graph_from_bootstrap};

fn page_with_bootstrap(payload: &str) -> String {
    format!(
        "<html><head><title>book</title></head><body>\
         <div id=\"content\">shell</div>\
         <script id=\"__NEXT_DATA__\" type=\"application/json\">{}</script>\
         </body></html>",
        payload
    )
}

#[test]
fn bootstrap_is_extracted_and_parsed() {
    let html = page_with_bootstrap(
        r#"{"props":{"pageProps":{"apolloState":{"Book:1":{"__typename":"Book","webUrl":"https://www.goodreads.com/book/show/1-x","title":"X"}}}}}"#,
    );

    let bootstrap = extract_bootstrap(&html).unwrap();
    let store = graph_from_bootstrap(&bootstrap);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("Book:1").unwrap()["title"], "X");
}

#[test]
fn missing_script_element_is_fatal() {
    let html = "<html><body><p>no payload here</p></body></html>";
    let err = extract_bootstrap(html).unwrap_err();
    assert!(matches!(err, ScrapeError::MissingBootstrap));
    assert_eq!(err.to_string(), "Could not find __NEXT_DATA__ JSON on the page.");
}

#[test]
fn malformed_payload_is_fatal() {
    let html = page_with_bootstrap(r#"{"props": {"unterminated"#);
    let err = extract_bootstrap(&html).unwrap_err();
    assert!(matches!(err, ScrapeError::MalformedBootstrap(_)));
    assert_eq!(err.to_string(), "Failed to parse __NEXT_DATA__ JSON.");
}

#[test]
fn missing_apollo_state_yields_empty_store() {
    let html = page_with_bootstrap(r#"{"props":{"pageProps":{}}}"#);
    let bootstrap = extract_bootstrap(&html).unwrap();
    let store = graph_from_bootstrap(&bootstrap);
    assert!(store.is_empty());
}
