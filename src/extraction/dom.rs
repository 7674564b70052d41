//! DOM access seam
//!
//! The extractor only needs four operations from a parsed tree. They are
//! expressed as [`SourceNode`] so the parser stays an external collaborator.

use scraper::{ElementRef, Selector};

/// Read-only view of a parsed element
pub trait SourceNode: Sized {
    /// First descendant matching `selector`, in document order
    fn find_first(&self, selector: &Selector) -> Option<Self>;

    /// All descendants matching `selector`, in document order
    fn find_all(&self, selector: &Selector) -> Vec<Self>;

    /// Number of descendants matching `selector`
    fn count_matching(&self, selector: &Selector) -> usize {
        self.find_all(selector).len()
    }

    /// Concatenated text of all descendant text nodes
    fn text(&self) -> String;

    /// Value of attribute `name`, if present
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl<'a> SourceNode for ElementRef<'a> {
    fn find_first(&self, selector: &Selector) -> Option<Self> {
        self.select(selector).next()
    }

    fn find_all(&self, selector: &Selector) -> Vec<Self> {
        self.select(selector).collect()
    }

    fn count_matching(&self, selector: &Selector) -> usize {
        self.select(selector).count()
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }
}

/// Collapse runs of whitespace to single spaces and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
