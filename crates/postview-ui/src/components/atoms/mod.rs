//! Shared UI atoms used across views.

pub(crate) mod empty_state;
pub(crate) mod loading;

pub(crate) use empty_state::{EmptyKind, EmptyState};
pub(crate) use loading::{InlineLoading, Spinner};
