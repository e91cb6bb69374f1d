#![allow(dead_code)]

use iniwatch::ini::{Config, DEFAULT_SECTION};

/// Builder for expected `Config` values.
///
/// Sections are registered in call order, so the result also pins down the
/// expected section order.
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    pub fn section(mut self, name: &str, entries: &[(&str, &str)]) -> Self {
        let section = self
            .config
            .new_section(name)
            .expect("builder section names must be unique and non-empty");
        for (key, value) in entries {
            section
                .new_entry(key, value)
                .expect("builder keys must be unique within a section");
        }
        self
    }

    pub fn default_section(self, entries: &[(&str, &str)]) -> Self {
        self.section(DEFAULT_SECTION, entries)
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
