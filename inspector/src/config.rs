use serde::Deserialize;
use std::fs;
use std::path::Path;

use mu_protocol::ProtocolConfig;

use crate::error::{InspectorError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "inspector/config/inspector.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    pub protocol: ProtocolConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Indent decoded JSON.
    pub pretty_json: bool,
    /// List superseded version variants in the rendered docs.
    pub include_variants: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            include_variants: true,
        }
    }
}

impl InspectorConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            InspectorError::Config(format!("Failed to read config file: {}", e))
        })?;

        let config: InspectorConfig = toml::from_str(&content).map_err(|e| {
            InspectorError::Config(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Loads `path`, falling back to the defaults when it cannot be read.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self::load_from_file(path).unwrap_or_else(|e| {
            log::warn!(
                "Using default inspector configuration, '{}' not loaded: {}",
                path.display(),
                e
            );
            Self::default()
        })
    }
}

/// Config file named by `CONFIG_PATH`, or the default location.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mu_protocol::{ClientVersion, Direction};

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [protocol]
            client_version = "0.97"
            direction = "client"

            [protocol.limits]
            max_packet_size = 4096
            max_group_elements = 64

            [output]
            pretty_json = false
            include_variants = false
        "#;

        let config: InspectorConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.protocol.client_version, ClientVersion::V097);
        assert_eq!(config.protocol.direction, Direction::ClientToServer);
        assert_eq!(config.protocol.limits.max_packet_size, 4096);
        assert_eq!(config.protocol.limits.max_group_elements, 64);
        assert!(!config.output.pretty_json);
        assert!(!config.output.include_variants);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let toml_str = r#"
            [protocol]
            client_version = "0.75"
        "#;

        let config: InspectorConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.protocol.client_version, ClientVersion::V075);
        assert_eq!(config.protocol.direction, Direction::ServerToClient);
        assert_eq!(config.protocol.limits, Default::default());
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let toml_str = r#"
            [protocol]
            client_version = "1.02"
        "#;

        assert!(toml::from_str::<InspectorConfig>(toml_str).is_err());
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = InspectorConfig::load_or_default("nonexistent/inspector.toml");
        assert_eq!(config, InspectorConfig::default());
    }
}
