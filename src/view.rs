//! Assembles the rendered view tree for a page of posts.
//!
//! The tree is what the selection extractor reads: post containers are the
//! boundaries a selection may not cross, and each post's body fragment
//! carries per-line quote depths from the parser.

use crate::markup::{Constructor, Element};
use crate::post::Post;
use rctree::Node;

/// Builds the view tree for one already-fetched page of posts, in page
/// order. Rebuilt from scratch on every render; never mutated in place.
pub fn build_post_list(posts: &[Post], con: &Constructor) -> Node<Element> {
    let mut root = Node::new(Element::Root);
    for post in posts {
        let mut container = Node::new(Element::Post {
            id: post.id,
            index: post.index,
        });
        container.append(con.fragment(&post.text));
        root.append(container);
    }
    root
}

/// Flattens a built view tree to HTML.
pub fn render_post_list(posts: &[Post], con: &Constructor) -> String {
    Constructor::build_node(&build_post_list(posts, con))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    fn post(id: i32, text: &str) -> Post {
        Post {
            id,
            author: "alice".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            text: text.to_string(),
            index: id,
        }
    }

    #[test]
    fn one_container_per_post() {
        let posts = vec![post(1, "hello"), post(2, ">hello\nhi")];
        let view = build_post_list(&posts, &Constructor::new());

        let ids: Vec<_> = view
            .children()
            .filter_map(|n| n.borrow().post_id())
            .collect();
        assert_eq!(vec![1, 2], ids);
    }

    #[test]
    fn renders_posts_with_their_quotes() {
        let posts = vec![post(1, "hello"), post(2, ">hello\nhi")];
        let html = render_post_list(&posts, &Constructor::new());

        assert_eq!(
            "<div class=\"post\" id=\"1\">hello\n</div>\
             <div class=\"post\" id=\"2\">\
             <div class=\"quote\" data-level=\"1\">\
             <span class=\"marker\">&gt;</span>hello\n\
             </div>hi\n</div>",
            html
        );
    }
}
