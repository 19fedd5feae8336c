//! Record types supplied by the forum API collaborator.
//!
//! Topics, posts and users are created and paginated server-side; this
//! crate receives them read-only and touches nothing but `Post::text`.
//! The rest of the fields exist so the view layer can label post
//! containers and metadata rows.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A topic row as listed by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Topic {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub last_post: DateTime<Utc>,
    pub post_count: i32,
}

/// A single post within a topic.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: i32,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub text: String,
    /// 1-based position within the topic, used for permalink anchors.
    /// List payloads may omit it.
    #[serde(default)]
    pub index: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
}

/// Formats a timestamp the way post metadata displays it.
pub fn showtime(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}
