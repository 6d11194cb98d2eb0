//! Configuration management for the object validator
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (object-validator.toml)
//! - Environment variables (OBJECT_VALIDATOR__<SECTION>__<KEY>, e.g.
//!   OBJECT_VALIDATOR__VALIDATION__MAX_DEPTH=16)
//!
//! ## Example config file (object-validator.toml):
//! ```toml
//! [validation]
//! root_label = "self"
//! report_policy = "required_or_present"
//! max_depth = 64
//!
//! [output]
//! format = "pretty"
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Validation engine settings
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Validation engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Path label of the root node
    #[serde(default = "default_root_label")]
    pub root_label: String,

    /// Which nodes get their violations reported
    #[serde(default)]
    pub report_policy: ReportPolicy,

    /// Deepest schema nesting walked before giving up
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

/// When a node's violations reach the error sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportPolicy {
    /// Report for required nodes, and for optional nodes whose value is present
    #[default]
    RequiredOrPresent,
    /// Report for required nodes only; optional nodes never report
    RequiredOnly,
}

impl ReportPolicy {
    /// Whether a node with this required-ness and value presence may report
    pub fn reports(&self, required: bool, present: bool) -> bool {
        match self {
            ReportPolicy::RequiredOrPresent => required || present,
            ReportPolicy::RequiredOnly => required,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format (pretty or compact)
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format for JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

// Default value functions
fn default_root_label() -> String {
    "self".to_string()
}

fn default_max_depth() -> usize {
    64
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            root_label: default_root_label(),
            report_policy: ReportPolicy::default(),
            max_depth: default_max_depth(),
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, adding a specific file on top of the defaults
    pub fn load_from(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_locations = [
            "object-validator.toml",
            ".object-validator.toml",
            "config/object-validator.toml",
        ];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "object-validator") {
            let xdg_config = config_dir.config_dir().join("object-validator.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            tracing::debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        // Load from environment variables (OBJECT_VALIDATOR__VALIDATION__MAX_DEPTH, ...)
        builder = builder.add_source(
            Environment::with_prefix("OBJECT_VALIDATOR")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.validation.root_label, "self");
        assert_eq!(config.validation.report_policy, ReportPolicy::RequiredOrPresent);
        assert_eq!(config.validation.max_depth, 64);
        assert_eq!(config.output.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_serialize_config() {
        let config = ValidatorConfig::default();
        let toml_str = config.to_toml().unwrap();
        assert!(toml_str.contains("[validation]"));
        assert!(toml_str.contains("report_policy = \"required_or_present\""));
        assert!(toml_str.contains("[output]"));
    }

    #[test]
    fn test_report_policy() {
        assert!(ReportPolicy::RequiredOrPresent.reports(false, true));
        assert!(!ReportPolicy::RequiredOrPresent.reports(false, false));
        assert!(!ReportPolicy::RequiredOnly.reports(false, true));
        assert!(ReportPolicy::RequiredOnly.reports(true, false));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[validation]\nroot_label = \"doc\"\nreport_policy = \"required_only\"\n\n[output]\nformat = \"compact\"\n",
        )
        .unwrap();

        let config = ValidatorConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config.validation.root_label, "doc");
        assert_eq!(config.validation.report_policy, ReportPolicy::RequiredOnly);
        assert_eq!(config.validation.max_depth, 64);
        assert_eq!(config.output.format, OutputFormat::Compact);
    }

    #[test]
    fn test_save_round_trips_through_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");
        let mut config = ValidatorConfig::default();
        config.validation.max_depth = 8;
        config.save(&path).unwrap();

        let loaded = ValidatorConfig::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.validation.max_depth, 8);
    }

    #[test]
    fn test_save_into_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("config.toml");
        let err = ValidatorConfig::default().save(&path).unwrap_err();
        assert!(matches!(err, SchemaError::Io(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(ValidatorConfig::load_from(Some(&path)).is_err());
    }
}
