//! Post actions emitted from UI controls.

/// Post actions emitted from the list and detail panes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostAction {
    /// Show a post in the detail pane; re-selecting retries failed requests.
    Select(u64),
    /// Return to the placeholder.
    Deselect,
    /// Request the post list again after a failure.
    ReloadList,
    /// Request a post's failed author or comments again.
    RetryDetail(u64),
}
