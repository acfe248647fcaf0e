//! Main library crate for the book scraper

// Re-export the main modules needed for integration tests
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod graph;
pub mod locate;
pub mod logging;
pub mod normalize;
pub mod payload;
pub mod summary;

// Re-export commonly used types
pub use error::{Result, ScrapeError};
pub use summary::BookSummary;
