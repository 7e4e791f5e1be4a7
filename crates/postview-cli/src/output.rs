//! Output renderers and formatting helpers for CLI commands.

use std::fmt::Write;

use anyhow::anyhow;
use postview_models::{Author, Comment, Post};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

const TITLE_WIDTH: usize = 60;

/// A post together with the resources the detail view shows next to it.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PostThread {
    pub(crate) post: Post,
    pub(crate) author: Author,
    pub(crate) comments: Vec<Comment>,
}

pub(crate) fn render_post_list(posts: &[Post], format: OutputFormat) -> CliResult<()> {
    let text = match format {
        OutputFormat::Json => to_json(posts)?,
        OutputFormat::Table => format_post_table(posts),
    };
    println!("{text}");
    Ok(())
}

pub(crate) fn render_post_thread(thread: &PostThread, format: OutputFormat) -> CliResult<()> {
    let text = match format {
        OutputFormat::Json => to_json(thread)?,
        OutputFormat::Table => format_post_thread(thread),
    };
    println!("{text}");
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}

#[must_use]
pub(crate) fn format_post_table(posts: &[Post]) -> String {
    let mut out = format!("{:>5} {:>5} TITLE", "ID", "USER");
    for post in posts {
        let _ = write!(
            out,
            "\n{:>5} {:>5} {}",
            post.id,
            post.user_id,
            truncate(&post.title, TITLE_WIDTH)
        );
    }
    if posts.is_empty() {
        out.push_str("\n(no posts)");
    }
    out
}

#[must_use]
pub(crate) fn format_post_thread(thread: &PostThread) -> String {
    let post = &thread.post;
    let author = &thread.author;
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", post.id, post.title);
    let _ = writeln!(out, "by {}", author_line(author));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", post.body);
    let _ = writeln!(out);
    let _ = write!(out, "comments ({}):", thread.comments.len());
    for comment in &thread.comments {
        let _ = write!(out, "\n- {} by {}", comment.name, comment.email);
        for line in comment.body.lines() {
            let _ = write!(out, "\n    {line}");
        }
    }
    out
}

/// Author name followed by the contact email in parentheses.
#[must_use]
pub(crate) fn author_line(author: &Author) -> String {
    format!("{} ({})", author.name, author.email)
}

fn truncate(text: &str, width: usize) -> String {
    let flattened = text.replace('\n', " ");
    if flattened.chars().count() <= width {
        return flattened;
    }
    let mut shortened: String = flattened.chars().take(width.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}
