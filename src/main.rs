use clap::Parser;
use tracing::error;

use book_scraper::config::Config;
use book_scraper::error::{Result, ScrapeError};
use book_scraper::summary::BookSummary;
use book_scraper::{extract, fetch, locate, logging, payload};

#[derive(Parser)]
#[command(name = "book_scraper")]
#[command(about = "Extracts book metadata from a Goodreads-style book page")]
#[command(version = "0.1.0")]
struct Cli {
    /// Book page URL, e.g. https://www.goodreads.com/book/show/13651-the-dispossessed
    url: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => fail(&e.to_string()),
        },
        Err(e) => fail(&e.to_string()),
    }
}

/// Emits the single-field error record and a non-zero exit status.
fn fail(message: &str) -> ! {
    error!("scrape failed: {}", message);
    println!("{}", serde_json::json!({ "error": message }));
    std::process::exit(1);
}

/// Runs one scrape end to end. Fatal failures surface as an error value;
/// only the entry point converts them into the error record and exit status.
async fn run(cli: Cli) -> Result<BookSummary> {
    let url = cli.url.ok_or(ScrapeError::MissingUrl)?;
    let config = Config::load_or_default()?;

    let html = fetch::fetch_page(&config, &url).await?;
    let bootstrap = payload::extract_bootstrap(&html)?;
    let store = payload::graph_from_bootstrap(&bootstrap);

    let book_id = locate::book_id_from_url(&url);
    Ok(extract::extract_summary(&store, book_id.as_deref()))
}
