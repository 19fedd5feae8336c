use rctree::Node;

/// Payload of one rendered view-tree node.
///
/// The tree is rebuilt from scratch on every render and never mutated in
/// place. Line nodes carry their quote depth and post containers carry
/// their record ids, so consumers resolve semantic ancestry from node
/// metadata instead of matching classes on a live document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Virtual container for a rendered page of posts. Never displayed.
    Root,
    /// One post's boundary. Selections may not cross it.
    Post { id: i32, index: i32 },
    /// One quotation level. Depth 0 is the virtual top level and renders
    /// no container of its own.
    Quote { depth: usize },
    /// One line of rendered content, marker span included. `depth` echoes
    /// the enclosing quote level.
    Line { markup: String, depth: usize },
}

impl Element {
    pub fn is_line(&self) -> bool {
        matches!(self, Element::Line { .. })
    }

    /// Quote depth of this node, where it has one.
    pub fn depth(&self) -> Option<usize> {
        match self {
            Element::Quote { depth } => Some(*depth),
            Element::Line { depth, .. } => Some(*depth),
            _ => None,
        }
    }

    pub fn post_id(&self) -> Option<i32> {
        match self {
            Element::Post { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// The visible text of this node: tags stripped, entities decoded.
    /// What a reader sees, and what selection offsets index into.
    pub fn text_content(&self) -> String {
        match self {
            Element::Line { markup, .. } => {
                let mut out = String::with_capacity(markup.len());
                let mut rest = markup.as_str();
                while let Some(i) = rest.find('<') {
                    decode_entities_into(&rest[..i], &mut out);
                    rest = match rest[i..].find('>') {
                        Some(j) => &rest[i + j + 1..],
                        None => "",
                    };
                }
                decode_entities_into(rest, &mut out);
                out
            }
            _ => String::new(),
        }
    }
}

/// Nearest post container at or above `node`, if any.
pub fn enclosing_post(node: &Node<Element>) -> Option<Node<Element>> {
    node.ancestors()
        .find(|n| matches!(&*n.borrow(), Element::Post { .. }))
}

/// Decodes the entities the sanitizer produces. A lone `&` that heads no
/// known entity is kept as-is.
fn decode_entities_into(text: &str, out: &mut String) {
    let mut rest = text;
    while let Some(i) = rest.find('&') {
        out.push_str(&rest[..i]);
        let tail = &rest[i..];
        let (decoded, len) = if tail.starts_with("&lt;") {
            ('<', 4)
        } else if tail.starts_with("&gt;") {
            ('>', 4)
        } else if tail.starts_with("&amp;") {
            ('&', 5)
        } else if tail.starts_with("&quot;") {
            ('"', 6)
        } else if tail.starts_with("&#x27;") {
            ('\'', 6)
        } else {
            ('&', 1)
        };
        out.push(decoded);
        rest = &tail[len..];
    }
    out.push_str(rest);
}
