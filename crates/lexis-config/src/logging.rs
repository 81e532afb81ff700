//! Tracing setup for binaries and tests that embed the settings engine.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Install a global subscriber that prints compact logs.
///
/// The level comes from `RUST_LOG`, defaulting to [`DEFAULT_DIRECTIVE`].
/// Fails if a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_with_default(DEFAULT_DIRECTIVE)
}

/// Like [`init`], with a caller-chosen fallback directive such as
/// `"lexis_config=debug"`.
pub fn init_with_default(directive: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer().with_target(true).with_level(true).compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(directive))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
