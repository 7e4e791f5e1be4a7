//! Feature slices: state, actions, API wiring, and views per resource.
pub mod posts;
