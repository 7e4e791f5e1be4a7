//! App-wide yewdux store.
//!
//! # Design
//! - One store holds shared UI state; feature slices own their reducers.

use crate::features::posts::state::PostsState;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Post list, selection, and detail caches.
    pub posts: PostsState,
}
