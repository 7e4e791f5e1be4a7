//! Post list/detail feature surface: state, actions, API wiring, and views.
//!
//! # Design
//! - State and selectors stay DOM-free so they test natively.
//! - HTTP calls are confined to `api`, rendering to `view`.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
