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
//! Postview UI wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    postview_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_NOTICE: &str = "postview-ui renders in the browser: run `trunk serve` in crates/postview-ui, \
then open the printed address.";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::Write;

    writeln!(std::io::stderr().lock(), "{NATIVE_NOTICE}")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_main_points_at_trunk() -> std::io::Result<()> {
        assert!(NATIVE_NOTICE.contains("trunk serve"));
        main()
    }
}
