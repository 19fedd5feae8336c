use super::{autolink, parse_quotes, sanitize, Element};
use rctree::Node;

/// Turns raw post bodies into view fragments and rendered HTML.
///
/// Carries the render options; defaults come from the application config
/// so the reading surface and any tooling render identically.
pub struct Constructor {
    /// When false, bare URLs stay plain text.
    pub autolink: bool,
    /// Anchor target for auto-linked URLs.
    pub link_target: String,
}

impl Default for Constructor {
    fn default() -> Self {
        Self {
            autolink: true,
            link_target: "_blank".to_string(),
        }
    }
}

impl Constructor {
    pub fn new() -> Self {
        Self::default()
    }

    /// A Constructor honoring the loaded application config.
    pub fn from_config() -> Self {
        let markup = crate::app_config::markup();
        Self {
            autolink: markup.autolink,
            link_target: markup.link_target,
        }
    }

    /// Sanitize, autolink and parse a raw post body into a view fragment.
    pub fn fragment(&self, input: &str) -> Node<Element> {
        let text = sanitize(input);
        let text = if self.autolink {
            autolink(&text, &self.link_target)
        } else {
            text
        };
        parse_quotes(&text)
    }

    /// Render a raw post body straight to HTML.
    pub fn build(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        Self::build_into(&self.fragment(input), &mut output);
        output
    }

    /// Render an already-built view (sub)tree to HTML. Consumers must not
    /// re-escape the result.
    pub fn build_node(node: &Node<Element>) -> String {
        let mut output = String::with_capacity(256);
        Self::build_into(node, &mut output);
        output
    }

    /// Recursive builder appending directly to one buffer, so no
    /// intermediate Strings pile up per nesting level.
    fn build_into(node: &Node<Element>, output: &mut String) {
        Self::element_open(&node.borrow(), output);
        for child in node.children() {
            Self::build_into(&child, output);
        }
        Self::element_close(&node.borrow(), output);
    }

    fn element_open(el: &Element, output: &mut String) {
        match el {
            Element::Root => {}
            Element::Post { id, .. } => {
                output.push_str(&format!("<div class=\"post\" id=\"{}\">", id));
            }
            // The virtual top level is not a quote block.
            Element::Quote { depth: 0 } => {}
            Element::Quote { depth } => {
                output.push_str(&format!("<div class=\"quote\" data-level=\"{}\">", depth));
            }
            Element::Line { markup, .. } => {
                output.push_str(markup);
                output.push('\n');
            }
        }
    }

    fn element_close(el: &Element, output: &mut String) {
        match el {
            Element::Post { .. } | Element::Quote { depth: 1.. } => output.push_str("</div>"),
            _ => {}
        }
    }
}
