use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Result, ScrapeError};

/// Runtime configuration, read from `config.toml` in the working directory.
/// Every setting has a default, so the file is optional; a present but
/// malformed file is an error.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub request: RequestConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request: RequestConfig::default(),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: format!("book_scraper/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    pub fn load_or_default() -> Result<Self> {
        Self::load_from(Path::new("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            ScrapeError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_from(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.request.timeout_seconds, 30);
        assert!(config.request.user_agent.starts_with("book_scraper/"));
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[request]\ntimeout_seconds = 5\nuser_agent = \"test-agent\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.request.timeout_seconds, 5);
        assert_eq!(config.request.user_agent, "test-agent");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "request = not-a-table").unwrap();

        assert!(Config::load_from(file.path()).is_err());
    }
}
