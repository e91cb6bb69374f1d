// src/ini/options.rs

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::errors::{IniError, Result};
use crate::ini::model::DEFAULT_SECTION;

/// Line terminator used when *producing* text. Input accepts both `\n` and
/// `\r\n` regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    Lf,
    CrLf,
}

impl LineTerminator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

impl Default for LineTerminator {
    fn default() -> Self {
        if cfg!(windows) {
            LineTerminator::CrLf
        } else {
            LineTerminator::Lf
        }
    }
}

impl FromStr for LineTerminator {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lf" => Ok(LineTerminator::Lf),
            "crlf" => Ok(LineTerminator::CrLf),
            other => Err(format!(
                "invalid line terminator: {other} (expected \"lf\" or \"crlf\")"
            )),
        }
    }
}

impl fmt::Display for LineTerminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineTerminator::Lf => f.write_str("lf"),
            LineTerminator::CrLf => f.write_str("crlf"),
        }
    }
}

/// Options recognised by the parser.
///
/// Defaults depend on the target platform:
/// - Windows: comment marker `;`, CRLF output.
/// - everything else: comment marker `#`, LF output.
///
/// The delimiter defaults to `=` and the implicit section to `DEFAULT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// At line start, skips the line. Inline, truncates the value.
    pub comment_marker: char,

    /// Separates a key from its value (first occurrence wins).
    pub delimiter: char,

    pub line_terminator: LineTerminator,

    /// Section that receives key/value lines preceding any header.
    pub default_section: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            comment_marker: if cfg!(windows) { ';' } else { '#' },
            delimiter: '=',
            line_terminator: LineTerminator::default(),
            default_section: DEFAULT_SECTION.to_string(),
        }
    }
}

static PLATFORM_DEFAULTS: OnceLock<ParseOptions> = OnceLock::new();

impl ParseOptions {
    /// Process-wide platform defaults. Initialised once on first use and
    /// never mutated afterwards.
    pub fn platform() -> &'static ParseOptions {
        PLATFORM_DEFAULTS.get_or_init(ParseOptions::default)
    }

    pub fn with_comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_line_terminator(mut self, terminator: LineTerminator) -> Self {
        self.line_terminator = terminator;
        self
    }

    pub fn with_default_section(mut self, name: impl Into<String>) -> Self {
        self.default_section = name.into();
        self
    }

    /// Reject combinations the line classifier cannot disambiguate.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == self.comment_marker {
            return Err(IniError::InvalidOptions(format!(
                "delimiter and comment marker must differ (both are {:?})",
                self.delimiter
            )));
        }
        if self.delimiter.is_whitespace() {
            return Err(IniError::InvalidOptions(format!(
                "delimiter must not be whitespace (got {:?})",
                self.delimiter
            )));
        }
        if self.comment_marker.is_whitespace() {
            return Err(IniError::InvalidOptions(format!(
                "comment marker must not be whitespace (got {:?})",
                self.comment_marker
            )));
        }
        if self.delimiter == '[' || self.comment_marker == '[' {
            return Err(IniError::InvalidOptions(
                "'[' is reserved for section headers".to_string(),
            ));
        }
        if self.default_section.is_empty() {
            return Err(IniError::InvalidOptions(
                "default section name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
