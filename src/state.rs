//! Explicit state for the reading/reply surface.
//!
//! One struct, passed by reference to whatever owns the screen, instead of
//! ambient globals. Each slice has a single writer: selection handling
//! owns the pending extraction, the form handlers own the draft.

use crate::markup::Element;
use crate::selection::{extract, QuoteExtraction, SelectionSpan};
use rctree::Node;

/// Draft contents of the reply form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyForm {
    pub title: String,
    pub text: String,
}

/// State shared across the post-list surface.
#[derive(Debug, Default)]
pub struct AppState {
    pub form: ReplyForm,
    extraction: Option<QuoteExtraction>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pending extraction, when the last selection was quotable.
    /// Drives whether the floating quote control is shown, and where.
    pub fn extraction(&self) -> Option<&QuoteExtraction> {
        self.extraction.as_ref()
    }

    /// Recomputes the pending extraction from the current platform
    /// selection. Runs on every selection-change notification; a
    /// collapsed or invalid selection clears any previous extraction.
    pub fn on_selection_change(&mut self, view: &Node<Element>, span: &SelectionSpan) {
        self.extraction = extract(view, span);
    }

    /// Clears the pending extraction outright, for when the platform
    /// reports no selection at all.
    pub fn clear_selection(&mut self) {
        self.extraction = None;
    }

    /// Appends the pending quote to the reply draft, followed by a blank
    /// line, and clears it. Returns whether a quote was pending; focus and
    /// scroll behavior is the caller's business.
    pub fn use_quote(&mut self) -> bool {
        match self.extraction.take() {
            Some(extraction) => {
                self.form.text.push_str(&extraction.text);
                self.form.text.push_str("\n\n");
                true
            }
            None => false,
        }
    }
}
