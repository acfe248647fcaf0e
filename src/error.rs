use thiserror::Error;

/// Fatal failures for a scrape run. The display strings double as the
/// user-facing `{"error": ...}` record, so they stay stable.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("URL is required.")]
    MissingUrl,

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch the page. Status code: {0}")]
    BadStatus(u16),

    #[error("Could not find __NEXT_DATA__ JSON on the page.")]
    MissingBootstrap,

    #[error("Failed to parse __NEXT_DATA__ JSON.")]
    MalformedBootstrap(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
