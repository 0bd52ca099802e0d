//! Shared helpers for the integration test suites.
#![allow(dead_code)]

use std::fmt::Write;

use textblock::TextBlock;
use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

/// One line per token: kind, byte range, text.
pub fn dump(block: &TextBlock<'_>) -> String {
    let mut out = String::new();
    for token in block.tokens() {
        let _ = writeln!(
            out,
            "{} {}..{} {:?}",
            token.kind,
            token.span.start,
            token.span.end,
            block.text(token)
        );
    }
    out
}
