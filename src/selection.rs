//! Selection-to-quote extraction.
//!
//! A reader highlights part of a rendered post; this module turns that
//! highlight into a reply snippet, re-indented one quote level deeper than
//! where it was taken from, plus the on-screen point where the floating
//! "quote" control belongs. It is a pure read over the view tree and the
//! platform-reported span; invalid selections are not errors, they simply
//! yield no extraction.

use crate::markup::{enclosing_post, Element, MARKER};
use rctree::Node;
use serde::Serialize;

/// One client rectangle covered by a selection, as reported by the
/// platform's selection mechanism.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// A resolvable endpoint of a selection: a line node in the view tree and
/// a character offset into that line's visible text.
#[derive(Debug, Clone)]
pub struct SpanPoint {
    pub node: Node<Element>,
    pub offset: usize,
}

impl SpanPoint {
    pub fn new(node: Node<Element>, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// A user selection over the rendered view tree. Owned by the platform;
/// this crate only ever reads it.
#[derive(Debug, Clone)]
pub struct SelectionSpan {
    pub anchor: SpanPoint,
    pub focus: SpanPoint,
    /// Client rectangles of the highlighted range, in visual order.
    pub rects: Vec<Rect>,
}

/// Where the floating quote control should sit: the bottom-right corner of
/// the last client rectangle of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnchorPoint {
    pub x: f64,
    pub y: f64,
}

/// The derived quoted-reply snippet for a valid selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteExtraction {
    /// Selected text, trimmed, every line prefixed with one more marker
    /// than the depth it was selected at.
    pub text: String,
    pub anchor: AnchorPoint,
}

/// Derives the quote snippet and control anchor for the current selection,
/// or `None` when the selection is collapsed, does not resolve into this
/// view, or crosses a post boundary.
pub fn extract(view: &Node<Element>, span: &SelectionSpan) -> Option<QuoteExtraction> {
    let lines: Vec<Node<Element>> = view
        .descendants()
        .filter(|n| n.borrow().is_line())
        .collect();

    let anchor_at = lines.iter().position(|n| same_node(n, &span.anchor.node))?;
    let focus_at = lines.iter().position(|n| same_node(n, &span.focus.node))?;

    if anchor_at == focus_at && span.anchor.offset == span.focus.offset {
        return None;
    }

    let anchor_post = enclosing_post(&span.anchor.node)?;
    let focus_post = enclosing_post(&span.focus.node)?;
    if anchor_post.borrow().post_id() != focus_post.borrow().post_id() {
        return None;
    }

    // Normalize to document order; the spans the platform hands over may
    // have been dragged backwards.
    let (start_at, start_off, end_at, end_off) =
        if (anchor_at, span.anchor.offset) <= (focus_at, span.focus.offset) {
            (anchor_at, span.anchor.offset, focus_at, span.focus.offset)
        } else {
            (focus_at, span.focus.offset, anchor_at, span.anchor.offset)
        };

    // Depth is read from the start point's line alone; a selection
    // spilling out of a quote container keeps the level it began at.
    let depth = lines[start_at].borrow().depth().unwrap_or(0);

    let selected = if start_at == end_at {
        let text = lines[start_at].borrow().text_content();
        slice_chars(&text, start_off, end_off)
    } else {
        let mut buf = skip_chars(&lines[start_at].borrow().text_content(), start_off);
        for node in &lines[start_at + 1..end_at] {
            buf.push('\n');
            buf.push_str(&node.borrow().text_content());
        }
        buf.push('\n');
        buf.push_str(&take_chars(&lines[end_at].borrow().text_content(), end_off));
        buf
    };

    let last = span.rects.last()?;
    let anchor = AnchorPoint {
        x: last.right,
        y: last.bottom,
    };

    let prefix = MARKER.to_string().repeat(depth + 1);
    let text = selected
        .trim()
        .split('\n')
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n");

    Some(QuoteExtraction { text, anchor })
}

/// Node identity. Two handles are the same node when they share the same
/// underlying allocation, regardless of payload equality.
fn same_node(a: &Node<Element>, b: &Node<Element>) -> bool {
    std::ptr::eq(&*a.borrow() as *const Element, &*b.borrow() as *const Element)
}

fn slice_chars(text: &str, from: usize, to: usize) -> String {
    text.chars()
        .skip(from)
        .take(to.saturating_sub(from))
        .collect()
}

fn skip_chars(text: &str, from: usize) -> String {
    text.chars().skip(from).collect()
}

fn take_chars(text: &str, to: usize) -> String {
    text.chars().take(to).collect()
}
