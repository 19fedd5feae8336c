//! The quoting core of a threaded forum.
//!
//! Post bodies use a line-prefix convention: each leading `>` glyph on a
//! line adds one level of quotation. The [`markup`] module turns raw post
//! text into sanitized, auto-linked HTML and an explicit view tree; the
//! [`selection`] module turns a reader's highlight over that tree into a
//! correctly re-indented reply snippet; [`state`] owns the pending
//! extraction and the reply draft it feeds.
//!
//! Topic/post CRUD, pagination and session handling belong to the API
//! collaborator. This crate only consumes already-fetched records
//! ([`post`]) and never performs I/O of its own.

pub mod app_config;
pub mod markup;
pub mod post;
pub mod selection;
pub mod state;
pub mod view;
