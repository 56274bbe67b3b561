//! Config file discovery and parsing

use super::{ConfigError, ConfigSource};
use crate::domain::{ConfigFormat, RunConfig};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

/// Resolve the run config from `source`.
///
/// `config.json` wins over `config.yaml`; when both are present a warning is
/// logged. Returns `Ok(None)` when neither file exists, leaving the caller's
/// CLI-derived values in effect. Unreadable or malformed files are errors.
pub fn resolve(source: &dyn ConfigSource) -> Result<Option<RunConfig>, ConfigError> {
    let Some(format) = discover_config(source) else {
        tracing::debug!("No config file found, using command-line arguments");
        return Ok(None);
    };

    tracing::info!("Using {} config.", format.label());
    load(source, format).map(Some)
}

fn discover_config(source: &dyn ConfigSource) -> Option<ConfigFormat> {
    let present: Vec<ConfigFormat> =
        ConfigFormat::ALL.into_iter().filter(|f| source.exists(f.file_name())).collect();

    if present.len() > 1 {
        tracing::warn!(
            "Both {} and {} are present. In such a case the JSON file will be prioritised.",
            ConfigFormat::Json.file_name(),
            ConfigFormat::Yaml.file_name()
        );
    }

    present.first().copied()
}

fn load(source: &dyn ConfigSource, format: ConfigFormat) -> Result<RunConfig, ConfigError> {
    let name = format.file_name();
    let path = source.describe(name);
    let content = source.read(name).map_err(|e| ConfigError::Read { path: path.clone(), source: e })?;

    match format {
        ConfigFormat::Json => parse_json_config(&content, path),
        ConfigFormat::Yaml => parse_yaml_config(&content, path),
    }
}

/// JSON keys match case-insensitively (`"All"`, `"VERBOSE"`), a `null` document
/// or `null` value leaves the defaults in place.
fn parse_json_config(content: &str, path: String) -> Result<RunConfig, ConfigError> {
    let raw: JsonValue = serde_json::from_str(content)
        .map_err(|e| ConfigError::Json { path: path.clone(), source: e })?;

    let normalized = match raw {
        JsonValue::Null => return Ok(RunConfig::default()),
        JsonValue::Object(map) => JsonValue::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.to_ascii_lowercase(), v))
                .collect(),
        ),
        other => other,
    };

    serde_json::from_value(normalized).map_err(|e| ConfigError::Json { path, source: e })
}

/// YAML settings, read with YAML 1.1 booleans (`yes`, `off`, `y`, ...).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct YamlConfig {
    #[serde(deserialize_with = "yaml11_bool")]
    all: bool,
    #[serde(deserialize_with = "yaml11_bool")]
    verbose: bool,
}

impl From<YamlConfig> for RunConfig {
    fn from(yaml: YamlConfig) -> Self {
        RunConfig::new(yaml.all, yaml.verbose)
    }
}

fn yaml11_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match YamlValue::deserialize(deserializer)? {
        YamlValue::Null => Ok(false),
        YamlValue::Bool(b) => Ok(b),
        YamlValue::String(s) => parse_yaml11_bool(&s).ok_or_else(|| {
            de::Error::invalid_value(de::Unexpected::Str(&s), &"a YAML boolean")
        }),
        other => Err(de::Error::custom(format!("expected a YAML boolean, found {:?}", other))),
    }
}

fn parse_yaml11_bool(s: &str) -> Option<bool> {
    match s {
        "y" | "Y" | "yes" | "Yes" | "YES" | "true" | "True" | "TRUE" | "on" | "On" | "ON" => {
            Some(true)
        }
        "n" | "N" | "no" | "No" | "NO" | "false" | "False" | "FALSE" | "off" | "Off" | "OFF" => {
            Some(false)
        }
        _ => None,
    }
}

/// An empty or `null` YAML document carries no settings and yields the defaults.
fn parse_yaml_config(content: &str, path: String) -> Result<RunConfig, ConfigError> {
    if content.trim().is_empty() {
        return Ok(RunConfig::default());
    }

    let raw: YamlValue = serde_yaml::from_str(content)
        .map_err(|e| ConfigError::Yaml { path: path.clone(), source: e })?;
    if raw.is_null() {
        return Ok(RunConfig::default());
    }

    serde_yaml::from_value::<YamlConfig>(raw)
        .map(RunConfig::from)
        .map_err(|e| ConfigError::Yaml { path, source: e })
}
