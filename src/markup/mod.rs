//! Post-body markup: sanitize → autolink → quote-depth parse → HTML.
//!
//! The only markup convention is the line-prefix quote marker (see
//! [`quote`]) plus bare-URL auto-linking; everything else in a post body
//! is literal text.

mod autolink;
mod constructor;
mod element;
mod quote;
mod sanitize;

pub use autolink::autolink;
pub use constructor::Constructor;
pub use element::{enclosing_post, Element};
pub use quote::{parse_quotes, MARKER, MARKER_GROUP_WIDTH, MARKER_HTML};
pub use sanitize::sanitize;

use rctree::Node;

/// Renders a raw post body to HTML with the default options.
pub fn render(input: &str) -> String {
    Constructor::new().build(input)
}

/// Renders a raw post body to a view fragment with the default options.
pub fn render_fragment(input: &str) -> Node<Element> {
    Constructor::new().fragment(input)
}
