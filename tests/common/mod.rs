#![allow(dead_code)]

use std::path::PathBuf;

use iniwatch::ini::ParseOptions;

/// Absolute path of a checked-in fixture under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Options pinned to `#` comments so tests behave the same on every platform.
pub fn hash_options() -> ParseOptions {
    ParseOptions::default().with_comment_marker('#')
}
