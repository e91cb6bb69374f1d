// src/ini/loader.rs

use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::errors::{IniError, Result};
use crate::fs::{FileSystem, RealFileSystem};
use crate::ini::model::Config;
use crate::ini::options::ParseOptions;
use crate::ini::parser::Parser;

/// Load and parse an INI file using the platform default options.
pub fn load(path: impl AsRef<Path>) -> Result<Config> {
    load_with(path, ParseOptions::platform())
}

/// Load and parse an INI file with explicit options.
pub fn load_with(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Config> {
    load_from(&RealFileSystem, path, options)
}

/// Load and parse an INI file through the given filesystem.
///
/// Open and read failures come back as [`IniError::Io`] carrying the path;
/// parse failures are returned as-is. Either way no `Config` is produced.
pub fn load_from(
    fs: &dyn FileSystem,
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<Config> {
    let path = path.as_ref();
    let parser = Parser::new(options.clone())?;

    debug!(?path, "loading INI file");
    let reader = fs.open_read(path).map_err(|source| IniError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parser
        .parse(BufReader::new(reader))
        .map_err(|err| match err {
            IniError::Read(source) => IniError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
}
