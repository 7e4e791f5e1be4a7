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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Test support utilities shared across Postview crates.
//!
//! The fixtures mirror the shape of the public JSON placeholder API, including
//! fields the DTOs do not model, so decoding tests exercise the real payloads.

pub mod fixtures;
