//! The story record produced from each front page entry.

use serde::{Deserialize, Serialize};

/// One ranked entry of the front page.
///
/// Every field is always populated: markup that is missing or unreadable
/// falls back to `0` or the empty string during extraction.
///
/// Serialized with camelCase keys (`number`, `title`, `points`,
/// `numberOfComments`), the shape the web client expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Displayed 1-based rank.
    pub number: u32,
    /// Text of the story link.
    pub title: String,
    /// Score.
    pub points: u32,
    /// Comment count.
    pub number_of_comments: u32,
}

impl Story {
    /// Starts a record from a title row, with no points or comments yet.
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self { number, title: title.into(), points: 0, number_of_comments: 0 }
    }
}
