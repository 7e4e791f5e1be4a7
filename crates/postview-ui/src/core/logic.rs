//! Pure UI helpers extracted from components for non-wasm testing.

use postview_models::{Author, Post};

/// Detail placeholder shown once the post list has loaded.
pub const SELECT_PROMPT: &str = "Select post…";

/// List entry label: the post id followed by its title.
#[must_use]
pub fn list_label(post: &Post) -> String {
    format!("{} {}", post.id, post.title)
}

/// Parenthesised contact shown next to the author name.
#[must_use]
pub fn author_contact(author: &Author) -> String {
    format!("({})", author.email)
}

/// Heading above the comment list.
#[must_use]
pub fn comments_heading(count: usize) -> String {
    match count {
        0 => "No comments".to_string(),
        1 => "1 comment".to_string(),
        n => format!("{n} comments"),
    }
}

/// Parse a post id taken from a route or link.
#[must_use]
pub fn parse_post_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post {
            id: 7,
            user_id: 2,
            title: "magnam facilis autem".into(),
            body: "dolore placeat".into(),
        }
    }

    #[test]
    fn list_label_prefixes_id() {
        assert_eq!(list_label(&post()), "7 magnam facilis autem");
    }

    #[test]
    fn author_contact_wraps_email() {
        let author = Author {
            id: 2,
            name: "Ervin Howell".into(),
            username: "Antonette".into(),
            email: "Shanna@melissa.tv".into(),
        };
        assert_eq!(author_contact(&author), "(Shanna@melissa.tv)");
    }

    #[test]
    fn comments_heading_pluralises() {
        assert_eq!(comments_heading(0), "No comments");
        assert_eq!(comments_heading(1), "1 comment");
        assert_eq!(comments_heading(5), "5 comments");
    }

    #[test]
    fn post_ids_parse_from_routes() {
        assert_eq!(parse_post_id(" 12 "), Some(12));
        assert_eq!(parse_post_id("abc"), None);
        assert_eq!(parse_post_id("-1"), None);
    }
}
