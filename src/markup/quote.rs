use super::Element;
use once_cell::sync::Lazy;
use rctree::Node;
use regex::Regex;

/// The raw quote marker glyph. One glyph at line start per nesting level.
pub const MARKER: char = '>';

/// The sanitized form of one marker glyph, which is what this parser
/// actually sees. Raw-side emission (reply snippets) always uses [`MARKER`].
pub const MARKER_HTML: &str = "&gt;";

/// Per-level stride of a leading marker run in sanitized text.
pub const MARKER_GROUP_WIDTH: usize = MARKER_HTML.len();

/// Leading run of escaped markers on a line.
static MARKER_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:&gt;)+").unwrap());

/// Parses sanitized (and possibly auto-linked) post text into a tree of
/// quote containers.
///
/// Lines are processed in order against a depth stack. A line's target
/// depth is its leading marker run divided by [`MARKER_GROUP_WIDTH`];
/// containers open or close by exactly the difference between consecutive
/// depths, so the result is balanced for any input, and a depth jump
/// synthesizes the skipped intermediate levels as empty containers. The
/// consumed marker prefix is kept on the line inside a marker span.
///
/// Total: there is no malformed input, only depths.
pub fn parse_quotes(input: &str) -> Node<Element> {
    let root = Node::new(Element::Quote { depth: 0 });
    let mut stack: Vec<Node<Element>> = vec![root.clone()];

    for line in input.split('\n') {
        let run = MARKER_RUN.find(line).map(|m| m.end()).unwrap_or(0);
        let depth = run / MARKER_GROUP_WIDTH;

        let markup = if run > 0 {
            format!(
                "<span class=\"marker\">{}</span>{}",
                &line[..run],
                &line[run..]
            )
        } else {
            line.to_string()
        };

        while stack.len() <= depth {
            let child = Node::new(Element::Quote { depth: stack.len() });
            if let Some(top) = stack.last_mut() {
                top.append(child.clone());
            }
            stack.push(child);
        }
        stack.truncate(depth + 1);

        if let Some(top) = stack.last_mut() {
            top.append(Node::new(Element::Line { markup, depth }));
        }
    }

    root
}
