//! Main scraping API.
//!
//! The entry point is [`FrontPage`], configured with a [`FrontPageConfig`],
//! along with the convenience functions [`fetch_front_page`] and
//! [`fetch_and_rank`].
//!
//! # Example
//!
//! ```rust,ignore
//! use frontpage_core::fetch_and_rank;
//!
//! # #[tokio::main]
//! # async fn main() -> frontpage_core::Result<()> {
//! let stories = fetch_and_rank(Some("points-desc-short-titles")).await?;
//! for story in stories {
//!     println!("{}. {} ({} points)", story.number, story.title, story.points);
//! }
//! # Ok(())
//! # }
//! ```

use crate::assemble::Listing;
use crate::fetch::{FRONT_PAGE_URL, FetchConfig};
#[cfg(feature = "fetch")]
use crate::fetch::fetch_url;
#[cfg(feature = "fetch")]
use crate::pipeline::resolve_mode;
use crate::pipeline::{PipelineMode, run_pipeline};
#[cfg(feature = "fetch")]
use crate::Result;
use crate::Story;

/// Configuration for a [`FrontPage`].
///
/// # Example
///
/// ```rust
/// use frontpage_core::FrontPageConfig;
///
/// let config = FrontPageConfig::builder()
///     .url("http://localhost:3000/")
///     .timeout(5)
///     .build();
/// assert_eq!(config.fetch.timeout, 5);
/// ```
#[derive(Debug, Clone)]
pub struct FrontPageConfig {
    /// Page to fetch (default: the Hacker News front page).
    pub url: String,

    /// HTTP settings for the fetch.
    pub fetch: FetchConfig,

    /// Where the story rows are and how they are marked.
    pub listing: Listing,
}

impl Default for FrontPageConfig {
    fn default() -> Self {
        Self { url: FRONT_PAGE_URL.to_string(), fetch: FetchConfig::default(), listing: Listing::default() }
    }
}

impl FrontPageConfig {
    /// Creates a new builder for FrontPageConfig.
    pub fn builder() -> FrontPageConfigBuilder {
        FrontPageConfigBuilder::new()
    }
}

/// Builder for FrontPageConfig.
pub struct FrontPageConfigBuilder {
    config: FrontPageConfig,
}

impl FrontPageConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: FrontPageConfig::default() }
    }

    /// Sets the page URL.
    pub fn url(mut self, value: impl Into<String>) -> Self {
        self.config.url = value.into();
        self
    }

    /// Sets the request timeout in seconds.
    pub fn timeout(mut self, value: u64) -> Self {
        self.config.fetch.timeout = value;
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Sets the listing layout.
    pub fn listing(mut self, value: Listing) -> Self {
        self.config.listing = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> FrontPageConfig {
        self.config
    }
}

impl Default for FrontPageConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads stories from front page markup, fetched or given.
///
/// # Example
///
/// ```rust
/// use frontpage_core::{FrontPage, PipelineMode};
///
/// let page = FrontPage::new();
/// let stories = page.parse("<html><body></body></html>");
/// assert!(stories.is_empty());
/// assert!(page.rank(&stories, PipelineMode::All).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrontPage {
    config: FrontPageConfig,
}

impl FrontPage {
    /// Creates a FrontPage with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a FrontPage with a custom configuration.
    pub fn with_config(config: FrontPageConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &FrontPageConfig {
        &self.config
    }

    /// Assembles the stories of already available markup.
    pub fn parse(&self, html: &str) -> Vec<Story> {
        self.config.listing.assemble(html)
    }

    /// Applies a mode to stories, returning an owned list.
    pub fn rank(&self, stories: &[Story], mode: PipelineMode) -> Vec<Story> {
        run_pipeline(stories, mode).into_owned()
    }

    /// Parses markup and applies a mode.
    pub fn parse_ranked(&self, html: &str, mode: PipelineMode) -> Vec<Story> {
        let stories = self.parse(html);
        self.rank(&stories, mode)
    }

    /// Fetches the configured page and assembles its stories.
    ///
    /// # Errors
    ///
    /// Fetch failures are returned unchanged; extraction itself cannot fail.
    #[cfg(feature = "fetch")]
    pub async fn fetch(&self) -> Result<Vec<Story>> {
        let html = fetch_url(&self.config.url, &self.config.fetch).await?;
        Ok(self.parse(&html))
    }

    /// Fetches the configured page and applies a mode.
    #[cfg(feature = "fetch")]
    pub async fn fetch_ranked(&self, mode: PipelineMode) -> Result<Vec<Story>> {
        let html = fetch_url(&self.config.url, &self.config.fetch).await?;
        let stories = self.parse_ranked(&html, mode);
        tracing::debug!(%mode, stories = stories.len(), "ranked front page");
        Ok(stories)
    }
}

/// Fetches the Hacker News front page with default settings.
#[cfg(feature = "fetch")]
pub async fn fetch_front_page() -> Result<Vec<Story>> {
    FrontPage::new().fetch().await
}

/// Fetches the front page and applies the mode named by an untrusted token.
#[cfg(feature = "fetch")]
pub async fn fetch_and_rank(token: Option<&str>) -> Result<Vec<Story>> {
    FrontPage::new().fetch_ranked(resolve_mode(token)).await
}
