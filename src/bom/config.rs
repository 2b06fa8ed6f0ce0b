use crate::error::{BomError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LABEL: &str = "Assembly";

/// Keys accepted by [`BomConfig::get`] and [`BomConfig::set`].
pub const CONFIG_KEYS: [&str; 3] = ["show-catalog", "color", "default-label"];

/// Configuration for bom, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BomConfig {
    /// Print the catalog after every build
    #[serde(default)]
    pub show_catalog: bool,

    /// Colour terminal output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Label used by `bom build` when none is given
    #[serde(default = "default_label")]
    pub default_label: String,
}

fn default_color() -> bool {
    true
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

impl Default for BomConfig {
    fn default() -> Self {
        Self {
            show_catalog: false,
            color: default_color(),
            default_label: default_label(),
        }
    }
}

impl BomConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BomConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "show-catalog" => Some(self.show_catalog.to_string()),
            "color" => Some(self.color.to_string()),
            "default-label" => Some(self.default_label.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "show-catalog" => self.show_catalog = parse_bool(key, value)?,
            "color" => self.color = parse_bool(key, value)?,
            "default-label" => {
                let label = value.trim();
                if label.is_empty() {
                    return Err(BomError::Validation(
                        "default-label cannot be empty".to_string(),
                    ));
                }
                self.default_label = label.to_string();
            }
            other => {
                return Err(BomError::Validation(format!(
                    "Unknown config key: {} (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(BomError::Validation(format!(
            "{} expects true or false, got '{}'",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BomConfig::default();
        assert!(!config.show_catalog);
        assert!(config.color);
        assert_eq!(config.default_label, "Assembly");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = BomConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, BomConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested");

        let mut config = BomConfig::default();
        config.set("show-catalog", "yes").unwrap();
        config.set("default-label", "Sedan").unwrap();
        config.save(&nested).unwrap();

        let loaded = BomConfig::load(&nested).unwrap();
        assert!(loaded.show_catalog);
        assert_eq!(loaded.default_label, "Sedan");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{ "show_catalog": true }"#,
        )
        .unwrap();

        let config = BomConfig::load(temp_dir.path()).unwrap();
        assert!(config.show_catalog);
        assert!(config.color);
        assert_eq!(config.default_label, "Assembly");
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "not json").unwrap();

        assert!(matches!(
            BomConfig::load(temp_dir.path()),
            Err(BomError::Serialization(_))
        ));
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = BomConfig::default();
        assert_eq!(config.get("color"), Some("true".to_string()));
        assert_eq!(config.get("default-label"), Some("Assembly".to_string()));
        assert_eq!(config.get("file-ext"), None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = BomConfig::default();
        assert!(config.set("color", "maybe").is_err());
        assert!(config.set("default-label", "  ").is_err());
        assert!(config.set("file-ext", ".md").is_err());
        assert_eq!(config, BomConfig::default());
    }
}
