// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Every parse error is fatal to the parse in progress: the first one aborts
//! it and no partially populated `Config` is ever returned.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IniError {
    /// The file could not be opened or read.
    #[error("I/O error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A read from an in-memory or caller-supplied reader failed.
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("empty section name")]
    EmptySectionName,

    #[error("section({0}) name already exists")]
    DuplicateSection(String),

    #[error("unclosed section: {0}")]
    UnclosedSection(String),

    #[error("delimiter({delimiter}) not found in line: {line}")]
    MissingDelimiter { delimiter: char, line: String },

    #[error("key({0}) already exists")]
    DuplicateKey(String),

    #[error("invalid parse options: {0}")]
    InvalidOptions(String),

    /// The reload trigger failed before the condition it waits for fired.
    #[error("reload trigger failed: {0}")]
    Trigger(String),

    #[error("file watch error: {0}")]
    Notify(#[from] notify::Error),
}

impl IniError {
    /// True for errors caused by the file's contents rather than by I/O or
    /// the reload machinery.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            IniError::EmptySectionName
                | IniError::DuplicateSection(_)
                | IniError::UnclosedSection(_)
                | IniError::MissingDelimiter { .. }
                | IniError::DuplicateKey(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, IniError>;
