//! Converter configuration.

use serde::{Deserialize, Serialize};

/// Level at which properties left over after conversion are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmappedLogLevel {
    #[default]
    Debug,
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Reported in `MissingMetadataInstance` errors and log lines.
    pub service_name: String,

    pub unmapped_log_level: UnmappedLogLevel,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            service_name: "openmeta-converter".to_string(),
            unmapped_log_level: UnmappedLogLevel::Debug,
        }
    }
}

impl ConverterConfig {
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ConverterConfig =
            serde_json::from_str(r#"{"unmapped_log_level": "warn"}"#).unwrap();
        assert_eq!(config.service_name, "openmeta-converter");
        assert_eq!(config.unmapped_log_level, UnmappedLogLevel::Warn);
    }
}
