use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::{Result, ScrapeError};

/// Issues the single page GET. Any non-200 status is fatal for the run, with
/// no retries; the client owns the timeout policy.
#[instrument(skip(config))]
pub async fn fetch_page(config: &Config, url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request.timeout_seconds))
        .user_agent(&config.request.user_agent)
        .build()?;

    debug!("fetching page");
    let response = client.get(url).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(ScrapeError::BadStatus(status.as_u16()));
    }

    let body = response.text().await?;
    info!("fetched {} bytes", body.len());
    Ok(body)
}
