//! HTML parsing and DOM navigation.
//!
//! This module provides the [`Document`] and [`Element`] types used to walk
//! the listing table of a front page with CSS selectors.
//!
//! # Example
//!
//! ```rust
//! use frontpage_core::Document;
//!
//! let html = r#"<table><tbody><tr class="athing"><td>Row</td></tr></tbody></table>"#;
//!
//! let doc = Document::parse(html);
//! let rows = doc.select("tr").unwrap();
//! assert_eq!(rows[0].class_name(), "athing");
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::{FrontpageError, Result};

/// Parses a CSS selector, reporting failures as [`FrontpageError::InvalidSelector`].
pub(crate) fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| FrontpageError::InvalidSelector(format!("{}: {}", selector, e)))
}

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Parsing is lenient: malformed markup is repaired the way browsers do
    /// it, so this never fails.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Selects elements using a CSS selector string.
    ///
    /// # Errors
    ///
    /// Returns [`FrontpageError::InvalidSelector`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.select_with(&sel))
    }

    /// Selects elements with a precompiled selector, in document order.
    pub fn select_with(&'_ self, selector: &Selector) -> Vec<Element<'_>> {
        self.html.select(selector).map(Element::from).collect()
    }

    /// Gets the title of the document.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }
}

/// A wrapper around scraper's ElementRef.
///
/// Element represents a single node of the document and exposes the handful of
/// accessors the row extractors need.
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> From<ElementRef<'a>> for Element<'a> {
    fn from(element: ElementRef<'a>) -> Self {
        Self { element }
    }
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Gets the full `class` attribute, or the empty string when absent.
    pub fn class_name(&self) -> &'a str {
        self.attr("class").unwrap_or("")
    }

    /// Gets the lowercase tag name of this element.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Returns the first descendant matching a precompiled selector.
    pub fn select_first(&self, selector: &Selector) -> Option<Element<'a>> {
        self.element.select(selector).next().map(Element::from)
    }

    /// Returns the last child that is an element, skipping text and comments.
    pub fn last_element_child(&self) -> Option<Element<'a>> {
        self.element
            .children()
            .filter_map(ElementRef::wrap)
            .last()
            .map(Element::from)
    }
}
