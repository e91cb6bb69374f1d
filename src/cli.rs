// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::ini::{LineTerminator, ParseOptions};

/// Command-line arguments for `iniwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "iniwatch",
    version,
    about = "Parse an INI file, print it, and optionally reload it on change.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the INI file.
    #[arg(long, short, value_name = "PATH", default_value = "config.ini")]
    pub file: String,

    /// Only print this section.
    #[arg(long, value_name = "NAME")]
    pub section: Option<String>,

    /// Comment marker (platform default: `;` on Windows, `#` elsewhere).
    #[arg(long, value_name = "CHAR")]
    pub comment: Option<char>,

    /// Key/value delimiter.
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Name of the section holding keys that precede any header.
    #[arg(long, value_name = "NAME")]
    pub default_section: Option<String>,

    /// Line terminator for the listing (`lf` or `crlf`).
    #[arg(long, value_name = "TERM")]
    pub line_terminator: Option<LineTerminator>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::List)]
    pub format: OutputFormat,

    /// Keep running and reprint the file whenever it changes.
    #[arg(long)]
    pub watch: bool,

    /// With `--watch`, ignore change events that leave the content intact.
    #[arg(long)]
    pub use_hash: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `INIWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// Platform defaults overridden by whatever flags were given.
    pub fn parse_options(&self) -> ParseOptions {
        let mut options = ParseOptions::platform().clone();
        if let Some(c) = self.comment {
            options = options.with_comment_marker(c);
        }
        if let Some(d) = self.delimiter {
            options = options.with_delimiter(d);
        }
        if let Some(ref name) = self.default_section {
            options = options.with_default_section(name.clone());
        }
        if let Some(t) = self.line_terminator {
            options = options.with_line_terminator(t);
        }
        options
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `section.key = value`, one per line.
    List,
    /// TOML tables, one per section.
    Toml,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
