//! Logging for integration test binaries.
//!
//! Each binary under `apps/backend/tests/` installs this from a `ctor` hook
//! so tracing output from the room and sessions shows up in failing tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the test subscriber. Safe to call any number of times.
///
/// Filter precedence: `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init()
            .ok();

        tracing::debug!("integration test logging installed");
    });
}
