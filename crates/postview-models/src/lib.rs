#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the posts API.
//!
//! The browser UI and the CLI both decode responses through these types so
//! the wire contract lives in one place. Field names follow the API's
//! camelCase JSON; fields the views never read are dropped on decode.

use serde::{Deserialize, Serialize};

/// Public API used when no override is configured.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// A post as returned by `/posts` and `/posts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post identifier.
    pub id: u64,
    /// Identifier of the user who wrote the post.
    pub user_id: u64,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
}

/// The author of a post, served by `/users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    /// User identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Login handle.
    pub username: String,
    /// Contact email.
    pub email: String,
}

/// A comment attached to a post, served by `/comments?postId={id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Identifier of the post the comment belongs to.
    pub post_id: u64,
    /// Comment identifier.
    pub id: u64,
    /// Comment subject line.
    pub name: String,
    /// Email of the commenter.
    pub email: String,
    /// Comment body text.
    pub body: String,
}

/// Builds resource URLs against a configurable API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl Endpoints {
    /// Create a builder for the given base URL; trailing slashes are dropped.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// URL of the post collection.
    #[must_use]
    pub fn posts(&self) -> String {
        format!("{}/posts", self.base)
    }

    /// URL of a single post.
    #[must_use]
    pub fn post(&self, id: u64) -> String {
        format!("{}/posts/{id}", self.base)
    }

    /// URL of a single user (post author).
    #[must_use]
    pub fn user(&self, id: u64) -> String {
        format!("{}/users/{id}", self.base)
    }

    /// URL of the comments filtered to one post.
    #[must_use]
    pub fn comments_for(&self, post_id: u64) -> String {
        format!("{}/comments?postId={post_id}", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postview_test_support::fixtures;

    #[test]
    fn endpoints_match_api_layout() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.posts(),
            "https://jsonplaceholder.typicode.com/posts"
        );
        assert_eq!(
            endpoints.user(3),
            "https://jsonplaceholder.typicode.com/users/3"
        );
        assert_eq!(
            endpoints.comments_for(7),
            "https://jsonplaceholder.typicode.com/comments?postId=7"
        );
        assert_eq!(
            endpoints.post(9),
            "https://jsonplaceholder.typicode.com/posts/9"
        );
    }

    #[test]
    fn endpoints_trim_trailing_slashes() {
        let endpoints = Endpoints::new("http://127.0.0.1:3000//");
        assert_eq!(endpoints.base(), "http://127.0.0.1:3000");
        assert_eq!(endpoints.posts(), "http://127.0.0.1:3000/posts");
    }

    #[test]
    fn post_decodes_camel_case_fields() {
        let post: Post = serde_json::from_value(fixtures::post()).expect("post decodes");
        assert_eq!(post.id, fixtures::POST_ID);
        assert_eq!(post.user_id, fixtures::AUTHOR_ID);
        assert!(post.title.starts_with("sunt aut facere"));
    }

    #[test]
    fn author_ignores_unmodelled_fields() {
        let author: Author = serde_json::from_value(fixtures::author()).expect("author decodes");
        assert_eq!(author.name, "Leanne Graham");
        assert_eq!(author.username, "Bret");
        assert_eq!(author.email, "Sincere@april.biz");
    }

    #[test]
    fn comments_decode_in_order() {
        let comments: Vec<Comment> =
            serde_json::from_value(fixtures::comments()).expect("comments decode");
        let ids: Vec<u64> = comments.iter().map(|comment| comment.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(
            comments
                .iter()
                .all(|comment| comment.post_id == fixtures::POST_ID)
        );
    }

    #[test]
    fn post_serializes_back_to_wire_names() {
        let post = Post {
            id: 4,
            user_id: 2,
            title: "t".into(),
            body: "b".into(),
        };
        let value = serde_json::to_value(&post).expect("post encodes");
        assert_eq!(value["userId"], 2);
        assert!(value.get("user_id").is_none());
    }
}
