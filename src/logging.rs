//! Logging setup.
//!
//! Call [`init`] once early. Respects `RUST_LOG` through the env filter
//! and is safe to call repeatedly, so tests and embedders can all call it.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INITIALIZED: OnceCell<()> = OnceCell::new();

pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        // try_init so an embedder's subscriber wins if one is installed
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}
