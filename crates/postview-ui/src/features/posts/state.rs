//! Post list/detail state and pure transformations for testing outside wasm.
//!
//! # Design
//! - Authors and comments are cached under the id they were requested for,
//!   so a late response never lands in another post's detail.
//! - Selection is kept even when the post is unknown (deep links may arrive
//!   before the list); selectors report the gap instead.

use postview_models::{Author, Comment, Post};
use std::collections::HashMap;
use std::rc::Rc;

/// Load status of the post list.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ListStatus {
    /// List request pending.
    #[default]
    Loading,
    /// List loaded.
    Ready,
    /// List request failed with a user-facing message.
    Failed(String),
}

/// Fetch status of a per-id resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Remote<T> {
    /// Request in flight.
    Loading,
    /// Resource available.
    Ready(T),
    /// Request failed with a user-facing message.
    Failed(String),
}

impl<T> Remote<T> {
    /// Build a remote value from a request outcome.
    #[must_use]
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(message) => Self::Failed(message),
        }
    }
}

/// Author cache entry.
pub type AuthorEntry = Remote<Rc<Author>>;
/// Comment cache entry.
pub type CommentsEntry = Remote<Rc<Vec<Comment>>>;

/// Current posts slice stored in the app state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PostsState {
    /// Load status of the list.
    pub status: ListStatus,
    /// Posts by id.
    pub by_id: HashMap<u64, Rc<Post>>,
    /// Post ids in API order.
    pub order: Vec<u64>,
    /// Post currently shown in the detail pane.
    pub selected_id: Option<u64>,
    /// Authors keyed by user id.
    pub authors: HashMap<u64, AuthorEntry>,
    /// Comments keyed by post id.
    pub comments: HashMap<u64, CommentsEntry>,
    /// Set once the first list request has succeeded or failed.
    pub settled: bool,
}

/// Requests still needed before a post's detail is complete.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetailRequests {
    /// Author to fetch, by user id.
    pub author: Option<u64>,
    /// Post whose comments to fetch.
    pub comments: Option<u64>,
}

impl DetailRequests {
    /// True when nothing has to be fetched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.author.is_none() && self.comments.is_none()
    }
}

/// Everything the detail pane renders for the selected post.
#[derive(Clone, Debug, PartialEq)]
pub struct PostDetail {
    /// The selected post.
    pub post: Rc<Post>,
    /// Its author; `Loading` until a response arrives.
    pub author: AuthorEntry,
    /// Its comments; `Loading` until a response arrives.
    pub comments: CommentsEntry,
}

/// Mark the list as loading before a (re)fetch.
pub fn begin_posts(state: &mut PostsState) {
    state.status = ListStatus::Loading;
}

/// Replace the list with a new snapshot in API order.
pub fn set_posts(state: &mut PostsState, posts: Vec<Post>) {
    state.order = posts.iter().map(|post| post.id).collect();
    state.by_id = posts
        .into_iter()
        .map(|post| (post.id, Rc::new(post)))
        .collect();
    state.status = ListStatus::Ready;
    state.settled = true;
}

/// Record a failed list request; previously loaded posts stay visible.
pub fn fail_posts(state: &mut PostsState, message: String) {
    state.status = ListStatus::Failed(message);
    state.settled = true;
}

/// Set the post shown in the detail pane.
pub const fn set_selected_id(state: &mut PostsState, id: Option<u64>) {
    state.selected_id = id;
}

/// Whether the author must be requested (never requested, or failed before).
#[must_use]
pub fn needs_author(state: &PostsState, user_id: u64) -> bool {
    matches!(
        state.authors.get(&user_id),
        None | Some(Remote::Failed(_))
    )
}

/// Whether a post's comments must be requested (never requested, or failed before).
#[must_use]
pub fn needs_comments(state: &PostsState, post_id: u64) -> bool {
    matches!(
        state.comments.get(&post_id),
        None | Some(Remote::Failed(_))
    )
}

/// Mark an author request as in flight.
pub fn mark_author_loading(state: &mut PostsState, user_id: u64) {
    state.authors.insert(user_id, Remote::Loading);
}

/// Mark a comments request as in flight.
pub fn mark_comments_loading(state: &mut PostsState, post_id: u64) {
    state.comments.insert(post_id, Remote::Loading);
}

/// Store the outcome of an author request under the requested id.
pub fn finish_author(state: &mut PostsState, user_id: u64, result: Result<Author, String>) {
    state
        .authors
        .insert(user_id, Remote::from_result(result.map(Rc::new)));
}

/// Store the outcome of a comments request under the requested post id.
pub fn finish_comments(state: &mut PostsState, post_id: u64, result: Result<Vec<Comment>, String>) {
    state
        .comments
        .insert(post_id, Remote::from_result(result.map(Rc::new)));
}

/// Author and comments requests to issue for a post shown in the detail pane.
///
/// Cached and in-flight entries are skipped; failed ones are requested again.
#[must_use]
pub fn detail_requests(state: &PostsState, post_id: u64) -> DetailRequests {
    let Some(post) = state.by_id.get(&post_id) else {
        return DetailRequests::default();
    };
    DetailRequests {
        author: needs_author(state, post.user_id).then_some(post.user_id),
        comments: needs_comments(state, post.id).then_some(post.id),
    }
}

/// The page spinner covers the first list request only.
#[must_use]
pub fn show_spinner(state: &PostsState) -> bool {
    state.status == ListStatus::Loading && !state.settled
}

/// True while a list reload after the first request is in flight.
#[must_use]
pub fn list_reloading(state: &PostsState) -> bool {
    state.status == ListStatus::Loading && state.settled
}

/// Read the posts in list order.
#[must_use]
pub fn select_posts(state: &PostsState) -> Vec<Rc<Post>> {
    state
        .order
        .iter()
        .filter_map(|id| state.by_id.get(id).cloned())
        .collect()
}

/// Read the selected post when it is part of the loaded list.
#[must_use]
pub fn select_selected_post(state: &PostsState) -> Option<Rc<Post>> {
    let id = state.selected_id?;
    state.by_id.get(&id).cloned()
}

/// True when a post is selected, the list has loaded, and the post is not in it.
#[must_use]
pub fn selection_missing(state: &PostsState) -> bool {
    state.status == ListStatus::Ready
        && state
            .selected_id
            .is_some_and(|id| !state.by_id.contains_key(&id))
}

/// Assemble the detail pane payload for the selected post.
#[must_use]
pub fn select_detail(state: &PostsState) -> Option<PostDetail> {
    let post = select_selected_post(state)?;
    let author = state
        .authors
        .get(&post.user_id)
        .cloned()
        .unwrap_or(Remote::Loading);
    let comments = state
        .comments
        .get(&post.id)
        .cloned()
        .unwrap_or(Remote::Loading);
    Some(PostDetail {
        post,
        author,
        comments,
    })
}
