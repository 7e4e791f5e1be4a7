//! Browser service clients.
pub(crate) mod api;
