//! Core, DOM-free primitives and helpers for the Web UI.
pub mod config;
pub mod error;
pub mod logic;
pub mod store;
