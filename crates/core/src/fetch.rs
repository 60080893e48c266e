//! Page fetching from URLs, files, and stdin.
//!
//! The front page is fetched once per call. There is no retry and no cache:
//! a failed request is returned to the caller as is.

use std::fs;
use std::path::PathBuf;
#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
use url::Url;

use crate::{FrontpageError, Result};

/// Address of the Hacker News front page.
pub const FRONT_PAGE_URL: &str = "https://news.ycombinator.com/";

/// HTTP client configuration for fetching pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: concat!("frontpage/", env!("CARGO_PKG_VERSION")).to_string() }
    }
}

/// Checks that a string is an absolute http(s) URL.
pub fn parse_http_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| FrontpageError::InvalidUrl(format!("{}: {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(FrontpageError::InvalidUrl(format!("unsupported scheme {}", scheme))),
    }
}

/// Fetches a page and returns its body as text.
///
/// Non-success status codes are errors, the same as transport failures.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = parse_http_url(url)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(FrontpageError::HttpError)?;

    tracing::debug!(url = %parsed_url, timeout = config.timeout, "fetching page");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header("Accept", "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| request_error(e, config))?;

    let content = response.text().await.map_err(|e| request_error(e, config))?;
    tracing::debug!(bytes = content.len(), "fetched page");

    Ok(content)
}

#[cfg(feature = "fetch")]
fn request_error(e: reqwest::Error, config: &FetchConfig) -> FrontpageError {
    if e.is_timeout() { FrontpageError::Timeout { timeout: config.timeout } } else { FrontpageError::HttpError(e) }
}

/// Reads a saved page from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(FrontpageError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(FrontpageError::from)
    }
}

/// Reads a page from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer)
}
