// src/ini/parser.rs

//! Single-pass, line-oriented scanner turning INI text into a [`Config`].
//!
//! Per line, after stripping leading whitespace:
//! 1. empty lines are skipped,
//! 2. lines starting with the comment marker are skipped,
//! 3. lines starting with `[` are section headers (name ends at the *last* `]`),
//! 4. anything else is `key <delimiter> value` in the current section.
//!
//! Inline comments are stripped from values. There is no escaping of the
//! comment marker inside a value.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::errors::{IniError, Result};
use crate::ini::model::Config;
use crate::ini::options::ParseOptions;

/// INI parser bound to one set of [`ParseOptions`].
#[derive(Debug, Clone)]
pub struct Parser {
    options: ParseOptions,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            options: ParseOptions::platform().clone(),
        }
    }
}

impl Parser {
    /// Build a parser after validating `options`.
    pub fn new(options: ParseOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse everything `reader` yields, one `\n`-terminated line at a time.
    ///
    /// The first malformed line aborts the parse; no partial `Config` is
    /// returned.
    pub fn parse<R: BufRead>(&self, mut reader: R) -> Result<Config> {
        let mut config = Config::new();
        let mut current = self.options.default_section.clone();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            // Bytes that are not UTF-8 (e.g. Latin-1 values) become U+FFFD
            // instead of failing the whole file.
            let line = String::from_utf8_lossy(&buf);
            if let Err(err) = self.parse_line(&line, &mut config, &mut current) {
                debug!(line_no, error = %err, "INI parse failed");
                return Err(err);
            }
        }

        debug!(
            sections = config.len(),
            lines = line_no,
            "parsed INI input"
        );
        Ok(config)
    }

    /// Parse an in-memory string.
    pub fn parse_str(&self, input: &str) -> Result<Config> {
        self.parse(input.as_bytes())
    }

    fn parse_line(&self, raw: &str, config: &mut Config, current: &mut String) -> Result<()> {
        let line = raw.trim_start();

        if line.is_empty() || line.starts_with(self.options.comment_marker) {
            return Ok(());
        }

        if line.starts_with('[') {
            *current = parse_section_name(line, config)?;
            trace!(section = %current, "registered section");
            return Ok(());
        }

        let (key, offset) = parse_key_name(line, self.options.delimiter)?;
        let value = parse_value(&line[offset..], self.options.comment_marker);

        // Key lines before any header land in the default section, which is
        // registered at most once (only while no section exists yet).
        let section = match config.section_mut(current.as_str()) {
            Some(section) => section,
            None => {
                trace!(section = %current, "registering implicit default section");
                config.new_section(current.as_str())?
            }
        };
        section.new_entry(key, value)
    }
}

/// Parse `reader` with the process-wide platform defaults.
pub fn parse<R: BufRead>(reader: R) -> Result<Config> {
    Parser::default().parse(reader)
}

/// Register the section named by a header line and return its name.
fn parse_section_name(line: &str, config: &mut Config) -> Result<String> {
    let Some(close) = line.rfind(']') else {
        return Err(IniError::UnclosedSection(line.to_string()));
    };
    let name = &line[1..close];
    config.new_section(name)?;
    Ok(name.to_string())
}

/// Split off the key. Returns the trimmed key and the byte offset at which
/// value parsing resumes.
fn parse_key_name(line: &str, delimiter: char) -> Result<(&str, usize)> {
    match line.find(delimiter) {
        Some(idx) => Ok((line[..idx].trim(), idx + delimiter.len_utf8())),
        None => Err(IniError::MissingDelimiter {
            delimiter,
            line: line.trim().to_string(),
        }),
    }
}

fn parse_value(rest: &str, comment_marker: char) -> &str {
    let value = rest.trim();
    match value.find(comment_marker) {
        Some(idx) => value[..idx].trim(),
        None => value,
    }
}
