//! Scrape the Hacker News front page into ranked story records.
//!
//! The pipeline is: markup → [`assemble_stories`] → [`run_pipeline`], with
//! the mode chosen by [`resolve_mode`]. [`FrontPage`] bundles fetching and
//! configuration around it.

pub mod assemble;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod formatters;
pub mod frontpage;
pub mod parse;
pub mod pipeline;
pub mod story;

pub use assemble::{Assembler, Assembly, DEFAULT_ROW_SELECTOR, Listing, ListingRow, assemble, assemble_stories};
pub use error::{FrontpageError, Result};
#[doc(hidden)]
pub use extract::{DetailFields, RowRole, TitleFields, classify, extract_points_and_comments, extract_title_and_number};
pub use fetch::{FRONT_PAGE_URL, FetchConfig, fetch_file, fetch_stdin, parse_http_url};
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use formatters::{
    JsonConfig, JsonFormatter, TextConfig, TextFormatter, ranked_to_json, stories_to_json, stories_to_text,
};
pub use frontpage::{FrontPage, FrontPageConfig, FrontPageConfigBuilder};
#[cfg(feature = "fetch")]
pub use frontpage::{fetch_and_rank, fetch_front_page};
pub use parse::{Document, Element};
pub use pipeline::{
    PipelineMode, filter_by_word_count, resolve_mode, run_pipeline, sort_by_comments_desc, sort_by_points_desc,
    word_count,
};
pub use story::Story;
