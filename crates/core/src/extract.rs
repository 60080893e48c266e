use std::num::IntErrorKind;
use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;

use crate::parse::Element;

/// Class attribute marking the first row of a story
pub const TITLE_ROW_CLASS: &str = "athing";

/// Class attribute marking the row that closes a story
pub const SPACER_ROW_CLASS: &str = "spacer";

static RANK: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".title .rank").expect("rank selector"));
static TITLE_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".titleline a").expect("title selector"));
static SUBLINE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".subline").expect("subline selector"));
static SCORE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".score").expect("score selector"));

static COMMENTS_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new("comments?").expect("comments pattern"));
static POINTS_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new("points?").expect("points pattern"));

/// Text the page shows in place of a count when a story has no comments
const NO_COMMENTS_SENTINEL: &str = "discuss";

/// Role of a table row within the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRole {
    /// Opens a story: rank and title
    Title,
    /// Closes a story
    Spacer,
    /// Anything else; carries points and comments when inside a story
    Detail,
}

/// Classify a row by exact match of its whole class attribute
pub fn classify(class_name: &str, title_class: &str, spacer_class: &str) -> RowRole {
    if class_name == title_class {
        RowRole::Title
    } else if class_name == spacer_class {
        RowRole::Spacer
    } else {
        RowRole::Detail
    }
}

/// Fields read from a title row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleFields {
    pub title: String,
    pub number: u32,
}

/// Fields read from a detail row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailFields {
    pub points: u32,
    pub number_of_comments: u32,
}

/// Parse a count the way the page prints it.
///
/// Surrounding whitespace (including the `&nbsp;` before "comments") is
/// ignored, an empty string is zero, and anything that is not a plain
/// non-negative integer is zero as well. Counts too large for a `u32`
/// saturate at `u32::MAX`.
pub fn parse_count(text: &str) -> u32 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<u32>() {
        Ok(count) => count,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u32::MAX,
        Err(_) => 0,
    }
}

/// Extract the rank and title from a title row.
///
/// A missing rank reads as 0 and a missing title link as the empty string.
pub fn extract_title_and_number(row: &Element<'_>) -> TitleFields {
    let number = row
        .select_first(&RANK)
        .map(|rank| parse_count(&rank.text().replace('.', "")))
        .unwrap_or(0);

    let title = row.select_first(&TITLE_LINK).map(|link| link.text()).unwrap_or_default();

    TitleFields { title, number }
}

/// Extract the score and comment count from a detail row.
///
/// The comment count comes from the last element of the sub-line, e.g.
/// `54&nbsp;comments`. When the sub-line is missing (job postings) the count
/// is 0, and the `discuss` link shown for uncommented stories is 0 too.
pub fn extract_points_and_comments(row: &Element<'_>) -> DetailFields {
    let comments_text = row
        .select_first(&SUBLINE)
        .and_then(|subline| subline.last_element_child())
        .map(|last| COMMENTS_SUFFIX.replace_all(&last.text(), "").into_owned())
        .unwrap_or_else(|| "0".to_string());

    let number_of_comments = if comments_text == NO_COMMENTS_SENTINEL { 0 } else { parse_count(&comments_text) };

    let points = row
        .select_first(&SCORE)
        .map(|score| parse_count(&POINTS_SUFFIX.replace_all(&score.text(), "")))
        .unwrap_or(0);

    DetailFields { points, number_of_comments }
}
