//! Story assembly from the rows of the listing table.
//!
//! The listing is a flat run of `<tr>` elements. Each story is one title row,
//! any number of detail rows and one spacer row, in that order. [`assemble`]
//! folds over the rows with an [`Assembly`] accumulator and emits a [`Story`]
//! at every spacer.
//!
//! # Example
//!
//! ```rust
//! use frontpage_core::assemble_stories;
//!
//! let html = r#"
//!     <table id="hnmain"><tbody>
//!         <tr><td>header</td></tr>
//!         <tr id="pagespace"></tr>
//!         <tr><td><table><tbody>
//!             <tr class="athing"><td class="title"><span class="rank">1.</span></td>
//!                 <td class="title"><span class="titleline"><a href="https://example.com">Example</a></span></td></tr>
//!             <tr><td class="subtext"><span class="subline"><span class="score">5 points</span> | <a>discuss</a></span></td></tr>
//!             <tr class="spacer"></tr>
//!         </tbody></table></td></tr>
//!     </tbody></table>
//! "#;
//!
//! let stories = assemble_stories(html);
//! assert_eq!(stories.len(), 1);
//! assert_eq!(stories[0].title, "Example");
//! assert_eq!(stories[0].points, 5);
//! ```

use std::sync::LazyLock;

use scraper::Selector;

use crate::extract::{
    DetailFields, RowRole, SPACER_ROW_CLASS, TITLE_ROW_CLASS, TitleFields, classify, extract_points_and_comments,
    extract_title_and_number,
};
use crate::parse::{Document, Element, parse_selector};
use crate::{Result, Story};

/// Rows of the story table inside the page layout table.
pub const DEFAULT_ROW_SELECTOR: &str = "#hnmain tr:nth-child(3) table tbody tr";

static DEFAULT_ROWS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(DEFAULT_ROW_SELECTOR).expect("default row selector"));

/// A row the assembler can read.
///
/// Implemented for [`Element`]; the assembler itself only sees roles and
/// extracted fields.
pub trait ListingRow {
    /// The role of this row given the two marker classes.
    fn role(&self, title_class: &str, spacer_class: &str) -> RowRole;

    /// Rank and title, read when the row opens a story.
    fn title_fields(&self) -> TitleFields;

    /// Points and comments, read when the row sits inside a story.
    fn detail_fields(&self) -> DetailFields;
}

impl ListingRow for Element<'_> {
    fn role(&self, title_class: &str, spacer_class: &str) -> RowRole {
        classify(self.class_name(), title_class, spacer_class)
    }

    fn title_fields(&self) -> TitleFields {
        extract_title_and_number(self)
    }

    fn detail_fields(&self) -> DetailFields {
        extract_points_and_comments(self)
    }
}

/// Accumulator state between two rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Assembly {
    /// Outside of a story.
    #[default]
    Idle,
    /// A title row was seen and its spacer has not been reached yet.
    Building(Story),
}

/// Stories emitted so far plus the current accumulator.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    state: Assembly,
    stories: Vec<Story>,
}

impl Assembler {
    /// Advances the accumulator by one row.
    pub fn step<R: ListingRow>(self, row: &R, title_class: &str, spacer_class: &str) -> Self {
        let Self { state, mut stories } = self;

        let state = match (row.role(title_class, spacer_class), state) {
            (RowRole::Title, Assembly::Idle) => {
                let TitleFields { title, number } = row.title_fields();
                Assembly::Building(Story::new(number, title))
            }
            (RowRole::Spacer, Assembly::Building(story)) => {
                stories.push(story);
                Assembly::Idle
            }
            (RowRole::Detail, Assembly::Building(mut story)) => {
                let DetailFields { points, number_of_comments } = row.detail_fields();
                story.points = points;
                story.number_of_comments = number_of_comments;
                Assembly::Building(story)
            }
            (role, state) => {
                tracing::trace!(?role, building = matches!(state, Assembly::Building(_)), "ignoring row");
                state
            }
        };

        Self { state, stories }
    }

    /// Current accumulator state.
    pub fn state(&self) -> &Assembly {
        &self.state
    }

    /// Ends the scan. A story still being built has no spacer and is dropped.
    pub fn finish(self) -> Vec<Story> {
        if let Assembly::Building(story) = &self.state {
            tracing::debug!(number = story.number, "dropping unterminated story");
        }
        self.stories
    }
}

/// Folds rows into stories using the given marker classes.
pub fn assemble<'r, R, I>(rows: I, title_class: &str, spacer_class: &str) -> Vec<Story>
where
    R: ListingRow + 'r,
    I: IntoIterator<Item = &'r R>,
{
    rows.into_iter()
        .fold(Assembler::default(), |acc, row| acc.step(row, title_class, spacer_class))
        .finish()
}

/// Where the story rows live in a page and how they are marked.
#[derive(Debug, Clone)]
pub struct Listing {
    row_selector: Selector,
    title_class: String,
    spacer_class: String,
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            row_selector: DEFAULT_ROWS.clone(),
            title_class: TITLE_ROW_CLASS.to_string(),
            spacer_class: SPACER_ROW_CLASS.to_string(),
        }
    }
}

impl Listing {
    /// Creates a listing with a custom row selector and the default markers.
    ///
    /// # Errors
    ///
    /// Returns [`FrontpageError::InvalidSelector`](crate::FrontpageError::InvalidSelector)
    /// if the selector does not parse.
    pub fn with_row_selector(selector: &str) -> Result<Self> {
        Ok(Self { row_selector: parse_selector(selector)?, ..Default::default() })
    }

    /// Replaces the title and spacer marker classes.
    pub fn markers(mut self, title_class: impl Into<String>, spacer_class: impl Into<String>) -> Self {
        self.title_class = title_class.into();
        self.spacer_class = spacer_class.into();
        self
    }

    /// Class marking title rows.
    pub fn title_class(&self) -> &str {
        &self.title_class
    }

    /// Class marking spacer rows.
    pub fn spacer_class(&self) -> &str {
        &self.spacer_class
    }

    /// Reads every story from a parsed document, in rank order.
    pub fn stories(&self, doc: &Document) -> Vec<Story> {
        let rows = doc.select_with(&self.row_selector);
        let stories = assemble(&rows, &self.title_class, &self.spacer_class);
        tracing::debug!(rows = rows.len(), stories = stories.len(), "assembled listing");
        stories
    }

    /// Parses markup and reads every story from it.
    pub fn assemble(&self, html: &str) -> Vec<Story> {
        self.stories(&Document::parse(html))
    }
}

/// Reads every story from front page markup with the default [`Listing`].
pub fn assemble_stories(html: &str) -> Vec<Story> {
    Listing::default().assemble(html)
}
