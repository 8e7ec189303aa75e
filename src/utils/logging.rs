//! Log output setup.
//!
//! Logs go to stderr so stdout can carry CSV untouched.
//!
//! ## Log Levels
//!
//! - **INFO**: sweep start/end, seed in use
//! - **WARN**: failed trials
//! - **DEBUG**: every completed trial with its timing

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes logging. Safe to call multiple times; only the first call has effect.
///
/// `RUST_LOG` overrides the default `info` level.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(tracing::Level::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
