//! Command handlers grouped by resource.

pub(crate) mod posts;
