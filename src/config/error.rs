//! Config loading errors

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed reading config file: {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON config: {path}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML config: {path}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}
