//! Filter and sort views over a list of stories.
//!
//! A [`PipelineMode`] names one view. Callers holding an untrusted token (a
//! query parameter, a CLI flag) turn it into a mode with [`resolve_mode`],
//! which never fails: anything unknown means [`PipelineMode::All`].
//!
//! # Example
//!
//! ```rust
//! use frontpage_core::{Story, resolve_mode, run_pipeline};
//!
//! let stories = vec![
//!     Story { number: 1, title: "Short one".into(), points: 10, number_of_comments: 1 },
//!     Story { number: 2, title: "Another short".into(), points: 30, number_of_comments: 2 },
//! ];
//!
//! let mode = resolve_mode(Some("points-desc-short-titles"));
//! let ranked = run_pipeline(&stories, mode);
//! assert_eq!(ranked[0].number, 2);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Story;

/// Title length, in words, separating short titles from long ones.
pub const TITLE_WORD_THRESHOLD: usize = 5;

/// A named filter and sort over stories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineMode {
    /// Titles longer than five words, most commented first.
    CommentsDescLongTitles,
    /// Titles of at most five words, highest score first.
    PointsDescShortTitles,
    /// Everything, in page order.
    #[default]
    All,
}

impl PipelineMode {
    /// Every mode, in menu order.
    pub const ALL: [PipelineMode; 3] =
        [PipelineMode::PointsDescShortTitles, PipelineMode::CommentsDescLongTitles, PipelineMode::All];

    /// Canonical token for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineMode::CommentsDescLongTitles => "comments-desc-long-titles",
            PipelineMode::PointsDescShortTitles => "points-desc-short-titles",
            PipelineMode::All => "all",
        }
    }

    /// Matches a token exactly, including the tokens older web clients send.
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "comments-desc-long-titles" | "number-comments-and-words-greather-than" => {
                Some(PipelineMode::CommentsDescLongTitles)
            }
            "points-desc-short-titles" | "points-and-words-lower-than" => Some(PipelineMode::PointsDescShortTitles),
            "all" => Some(PipelineMode::All),
            _ => None,
        }
    }
}

impl fmt::Display for PipelineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PipelineMode {
    type Err = String;

    /// Strict parse; use [`resolve_mode`] for untrusted input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| {
            let valid: Vec<&str> = Self::ALL.iter().map(PipelineMode::as_str).collect();
            format!("Invalid mode: {}. Valid options: {}", s, valid.join(", "))
        })
    }
}

/// Maps an optional, untrusted token to a mode.
///
/// Unknown tokens, the empty string and `None` all resolve to
/// [`PipelineMode::All`].
pub fn resolve_mode(token: Option<&str>) -> PipelineMode {
    token.and_then(PipelineMode::from_token).unwrap_or_default()
}

/// Counts the words of a title.
///
/// Everything but ASCII letters, digits and whitespace is dropped first, so
/// `super-amazing.` is one word and a lone `-` is none. Words are split on
/// the space character only.
pub fn word_count(text: &str) -> usize {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    cleaned.split(' ').filter(|word| !word.is_empty()).count()
}

/// Keeps stories whose title has more than `threshold` words when
/// `keep_greater`, or at most `threshold` words otherwise. Order is kept.
pub fn filter_by_word_count(stories: &[Story], threshold: usize, keep_greater: bool) -> Vec<Story> {
    stories
        .iter()
        .filter(|story| (word_count(&story.title) > threshold) == keep_greater)
        .cloned()
        .collect()
}

/// Highest score first; ties keep their input order.
pub fn sort_by_points_desc(stories: &[Story]) -> Vec<Story> {
    let mut sorted = stories.to_vec();
    sorted.sort_by(|a, b| b.points.cmp(&a.points));
    sorted
}

/// Most comments first; ties keep their input order.
pub fn sort_by_comments_desc(stories: &[Story]) -> Vec<Story> {
    let mut sorted = stories.to_vec();
    sorted.sort_by(|a, b| b.number_of_comments.cmp(&a.number_of_comments));
    sorted
}

/// Applies a mode. [`PipelineMode::All`] hands the input back without copying.
pub fn run_pipeline(stories: &[Story], mode: PipelineMode) -> Cow<'_, [Story]> {
    match mode {
        PipelineMode::CommentsDescLongTitles => {
            Cow::Owned(sort_by_comments_desc(&filter_by_word_count(stories, TITLE_WORD_THRESHOLD, true)))
        }
        PipelineMode::PointsDescShortTitles => {
            Cow::Owned(sort_by_points_desc(&filter_by_word_count(stories, TITLE_WORD_THRESHOLD, false)))
        }
        PipelineMode::All => Cow::Borrowed(stories),
    }
}
