//! Configuration loading
//!
//! A `config.json` or `config.yaml` found through a [`ConfigSource`] replaces
//! the settings given on the command line (JSON > YAML > CLI).

pub mod error;
pub mod loader;
pub mod source;

pub use error::ConfigError;
pub use loader::resolve;
pub use source::{ConfigSource, DirSource};
