//! Diagnostic tracing for catalog startup.
//!
//! Events emitted by the crate:
//! - `debug`: each tutorial and diff binding registered, catalog files read,
//!   bindings skipped in the server context, fallback to the built-in catalog.
//! - `info`: one `catalog loaded` summary with tutorial and binding counts.
//!
//! Everything goes to stderr so stdout stays clean for the JSON that
//! `show`, `step` and `diff` print.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: registration noise stays hidden.
const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber, filtered by `RUST_LOG`.
///
/// ```bash
/// RUST_LOG=tutorials=debug tutorials --client validate
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
        .init();
}
