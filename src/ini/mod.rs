// src/ini/mod.rs

//! INI data model, parser options, the line scanner, and file loading.

pub mod loader;
pub mod model;
pub mod options;
pub mod parser;

pub use loader::{load, load_from, load_with};
pub use model::{Config, DEFAULT_SECTION, Section};
pub use options::{LineTerminator, ParseOptions};
pub use parser::{Parser, parse};
