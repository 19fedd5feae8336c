//! End-to-end runs of the quoting pipeline: fetch-shaped records in,
//! rendered page out, selection in, re-indented reply draft out.

use soapbox::markup::{render, Constructor, Element};
use soapbox::post::Post;
use soapbox::selection::{extract, Rect, SelectionSpan, SpanPoint};
use soapbox::state::AppState;
use soapbox::view::{build_post_list, render_post_list};

use rctree::Node;

fn fetch_page() -> Vec<Post> {
    // Shaped like the API's post-list payload; only `text` matters here.
    serde_json::from_str(
        r#"[
            {"id": 11, "author": "alice", "timestamp": "2024-01-02T03:04:05Z",
             "text": "Has anyone tried https://zombo.com/ yet?", "index": 1},
            {"id": 12, "author": "bob", "timestamp": "2024-01-02T03:10:00Z",
             "text": ">Has anyone tried https://zombo.com/ yet?\nOnly once.\n>>never again\nWhy not?",
             "index": 2}
        ]"#,
    )
    .expect("post list payload")
}

fn nth_line(view: &Node<Element>, nth: usize) -> Node<Element> {
    view.descendants()
        .filter(|n| n.borrow().is_line())
        .nth(nth)
        .expect("line node")
}

fn span(view: &Node<Element>, a: (usize, usize), f: (usize, usize)) -> SelectionSpan {
    SelectionSpan {
        anchor: SpanPoint::new(nth_line(view, a.0), a.1),
        focus: SpanPoint::new(nth_line(view, f.0), f.1),
        rects: vec![Rect {
            left: 12.0,
            top: 240.0,
            right: 188.0,
            bottom: 256.0,
        }],
    }
}

#[test]
fn page_renders_with_quotes_links_and_post_boundaries() {
    let posts = fetch_page();
    let html = render_post_list(&posts, &Constructor::new());

    assert!(html.contains("<div class=\"post\" id=\"11\">"));
    assert!(html.contains("<div class=\"post\" id=\"12\">"));
    assert!(html.contains("<div class=\"quote\" data-level=\"1\">"));
    assert!(html.contains("<div class=\"quote\" data-level=\"2\">"));
    assert!(html.contains("<a target=\"_blank\" href=\"https://zombo.com/\">https://zombo.com/</a>"));
    assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
}

#[test]
fn select_quote_reply_and_rerender() {
    let posts = fetch_page();
    let view = build_post_list(&posts, &Constructor::new());
    let mut state = AppState::new();

    // Post 12's lines are numbered 1..=4 across the page; line 3 is
    // ">>never again" at depth 2. Select "never again" past the markers.
    state.on_selection_change(&view, &span(&view, (3, 2), (3, 13)));
    let pending = state.extraction().expect("quotable selection").clone();
    assert_eq!(">>>never again", pending.text);
    assert_eq!(188.0, pending.anchor.x);
    assert_eq!(256.0, pending.anchor.y);

    assert!(state.use_quote());
    assert_eq!(">>>never again\n\n", state.form.text);
    assert!(state.extraction().is_none());

    // The submitted draft round-trips through the renderer one level
    // deeper than where it was selected.
    let draft = render_fragment_line_depth(&state.form.text);
    assert_eq!(3, draft);
}

#[test]
fn selection_across_posts_yields_no_affordance() {
    let posts = fetch_page();
    let view = build_post_list(&posts, &Constructor::new());
    let mut state = AppState::new();

    // Line 0 lives in post 11, line 2 in post 12.
    state.on_selection_change(&view, &span(&view, (0, 0), (2, 4)));
    assert!(state.extraction().is_none());
    assert!(!state.use_quote());
}

#[test]
fn selection_spanning_depths_keeps_its_starting_level() {
    let posts = fetch_page();
    let view = build_post_list(&posts, &Constructor::new());

    // From inside post 12's depth-1 line into its top-level "Only once.".
    let got = extract(&view, &span(&view, (1, 1), (2, 10))).expect("extraction");
    assert!(got.text.lines().all(|l| l.starts_with(">>")));
    assert!(got.text.ends_with(">>Only once."));
}

#[test]
fn rendered_examples_match_the_convention() {
    assert_eq!("hello\nworld\n", render("hello\nworld"));
    assert_eq!(
        "<div class=\"quote\" data-level=\"1\">\
         <span class=\"marker\">&gt;</span>one\n\
         <div class=\"quote\" data-level=\"2\">\
         <span class=\"marker\">&gt;&gt;</span>two\n\
         </div>\
         <span class=\"marker\">&gt;</span>one again\n\
         </div>",
        render(">one\n>>two\n>one again")
    );
}

fn render_fragment_line_depth(text: &str) -> usize {
    soapbox::markup::render_fragment(text)
        .descendants()
        .filter(|n| n.borrow().is_line())
        .filter_map(|n| n.borrow().depth())
        .max()
        .unwrap_or(0)
}
