//! Loading configs from JSON and YAML documents.

use std::path::Path;

use super::{ConfigError, SprinklesConfig};

impl SprinklesConfig {
    /// Parses a config from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError::Parse {
            format: "json",
            message: e.to_string(),
        })
    }

    /// Parses a config from a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(source).map_err(|e| ConfigError::Parse {
            format: "yaml",
            message: e.to_string(),
        })
    }

    /// Reads a config file, picking the format from its extension.
    ///
    /// `.json` files are parsed as JSON, `.yaml` and `.yml` as YAML.
    /// The config is only parsed here; call [`validate`](Self::validate)
    /// or compile it to check its structure.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "loading sprinkles config");
        parse(&source)
    }
}
