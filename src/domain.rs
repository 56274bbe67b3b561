//! Core domain types

use serde::Deserialize;

/// Effective settings for a single import run.
///
/// Built either from CLI flags or from a config file; a config file replaces
/// the CLI-derived values entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Prefix every output line with `[All]`
    pub all: bool,
    /// Print a progress line every [`crate::runner::PROGRESS_INTERVAL`] rows
    pub verbose: bool,
}

impl RunConfig {
    pub fn new(all: bool, verbose: bool) -> Self {
        Self { all, verbose }
    }
}

/// Supported config file formats, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    pub const ALL: [ConfigFormat; 2] = [ConfigFormat::Json, ConfigFormat::Yaml];

    pub fn file_name(self) -> &'static str {
        match self {
            ConfigFormat::Json => "config.json",
            ConfigFormat::Yaml => "config.yaml",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfigFormat::Json => "JSON",
            ConfigFormat::Yaml => "YAML",
        }
    }
}
