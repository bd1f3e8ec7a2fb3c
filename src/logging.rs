//! Diagnostic logging for the host binary.
//!
//! Library crates emit `tracing` events; this installs the subscriber that
//! prints them. Filtering follows `RUST_LOG`:
//!
//! - `RUST_LOG=info` - opens, saves, replacements
//! - `RUST_LOG=quill_editor=debug` - everything from the editor core
//! - unset - warnings only
//!
//! Output goes to stderr so it never mixes with command results on stdout.

use std::io;

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Call once, before any command runs.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
