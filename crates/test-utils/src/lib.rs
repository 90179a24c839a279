pub mod buffer;
pub mod scripted_runner;

use std::future::Future;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

pub use buffer::SharedBuffer;
pub use scripted_runner::{Script, ScriptedRunner};

/// Upper bound for any single awaited step in a test.
pub const TEST_DEADLINE: Duration = Duration::from_secs(5);

/// Install a per-test tracing subscriber; later calls are no-ops.
///
/// Output goes through the test writer, so it only shows for failing tests
/// or with `--nocapture`. `RUST_LOG` picks the filter, default `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Err means another test already installed one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(true)
        .try_init();
}

/// Await `fut`, panicking if it takes longer than [`TEST_DEADLINE`].
pub async fn with_timeout<F: Future>(fut: F) -> F::Output {
    match tokio::time::timeout(TEST_DEADLINE, fut).await {
        Ok(out) => out,
        Err(_) => panic!("test step exceeded {TEST_DEADLINE:?}"),
    }
}
