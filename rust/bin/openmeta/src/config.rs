//! CLI configuration.
//!
//! Reads an optional TOML file:
//!
//! ```toml
//! types = "/etc/openmeta/types.json"
//!
//! [converter]
//! service_name = "catalog-bridge"
//! unmapped_log_level = "warn"
//! ```

use std::path::{Path, PathBuf};

use openmeta_convert::ConverterConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Type registry JSON. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<PathBuf>,

    #[serde(default)]
    pub converter: ConverterConfig,
}

impl CliConfig {
    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: CliConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openmeta_convert::UnmappedLogLevel;

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.converter, ConverterConfig::default());
        assert!(config.types.is_none());
    }

    #[test]
    fn roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("openmeta.toml");

        let config = CliConfig {
            types: Some(PathBuf::from("/etc/openmeta/types.json")),
            converter: ConverterConfig {
                service_name: "catalog-bridge".to_string(),
                unmapped_log_level: UnmappedLogLevel::Warn,
            },
        };
        config.save(&path).unwrap();

        let back = CliConfig::load(&path).unwrap();
        assert_eq!(back.types, config.types);
        assert_eq!(back.converter, config.converter);
    }

    #[test]
    fn partial_converter_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openmeta.toml");
        std::fs::write(&path, "[converter]\nunmapped_log_level = \"warn\"\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.converter.service_name, "openmeta-converter");
        assert_eq!(config.converter.unmapped_log_level, UnmappedLogLevel::Warn);
    }
}
