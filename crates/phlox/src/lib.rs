//! Phlox
//!
//! A code-style fixer for PHP: lexes each file into a token stream,
//! runs the configured rules over it, and writes the result back. The
//! library surface exists for the binary and for integration tests; the
//! interesting logic lives in `phlox_rules`.

pub mod commands;
pub mod config_file;

use std::sync::Once;

use phlox_lexer::LexError;
use phlox_rules::{FixConfig, Registry};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times. Enable with
/// `RUST_LOG=phlox=debug` or `RUST_LOG=phlox_rules=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Fix one file's source text under `config`.
///
/// Returns the rewritten text, which equals the input when no rule
/// applied. Tokenization failures are returned, never patched around.
pub fn fix_source(source: &str, config: &FixConfig) -> Result<String, LexError> {
    let mut stream = phlox_lexer::tokenize(source)?;
    let registry = Registry::with_default_rules(config);
    let changed = registry.apply(&mut stream, &config.whitespace_policy(), config.allow_risky);
    if !changed.is_empty() {
        tracing::debug!(rules = ?changed, "source changed");
    }
    Ok(stream.source())
}
