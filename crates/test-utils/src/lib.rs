pub mod builders;

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Once;

use tempfile::NamedTempFile;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Write `contents` to a fresh temporary `.ini` file.
pub fn write_ini(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".ini")
        .tempfile()
        .expect("creating temp ini file");
    file.write_all(contents.as_bytes())
        .expect("writing temp ini file");
    file.flush().expect("flushing temp ini file");
    file
}

/// Atomically replace `path` with `contents` (write a sibling, then rename),
/// so watchers never observe a half-written file.
pub fn replace_file(path: &Path, contents: &str) {
    let staging = path.with_extension("staging");
    fs::write(&staging, contents).expect("writing staging file");
    fs::rename(&staging, path).expect("renaming staging file into place");
}
