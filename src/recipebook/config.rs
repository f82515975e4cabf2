use crate::error::{RecipeError, Result};
use crate::store::DEFAULT_SLOT_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for recipebook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeBookConfig {
    /// Key of the durable slot holding the recipe list
    #[serde(default = "default_slot_key")]
    pub slot_key: String,

    /// Pretty-print the slot JSON when writing
    #[serde(default)]
    pub pretty: bool,
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

impl Default for RecipeBookConfig {
    fn default() -> Self {
        Self {
            slot_key: default_slot_key(),
            pretty: false,
        }
    }
}

impl RecipeBookConfig {
    pub const KEYS: &'static [&'static str] = &["slot-key", "pretty"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RecipeError::Io)?;
        let config: RecipeBookConfig =
            serde_json::from_str(&content).map_err(RecipeError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RecipeError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RecipeError::Serialization)?;
        fs::write(config_path, content).map_err(RecipeError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "slot-key" => Some(self.slot_key.clone()),
            "pretty" => Some(self.pretty.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "slot-key" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("slot-key cannot be empty".to_string());
                }
                self.slot_key = value.to_string();
            }
            "pretty" => {
                self.pretty = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => return Err(format!("pretty expects true or false, got '{}'", other)),
                };
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RecipeBookConfig::default();
        assert_eq!(config.slot_key, "@recipes");
        assert!(!config.pretty);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = RecipeBookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, RecipeBookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = RecipeBookConfig::default();
        config.set("pretty", "yes").unwrap();
        config.set("slot-key", " @cookbook ").unwrap();
        config.save(&dir).unwrap();

        let loaded = RecipeBookConfig::load(&dir).unwrap();
        assert!(loaded.pretty);
        assert_eq!(loaded.slot_key, "@cookbook");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"pretty": true}"#).unwrap();
        let loaded = RecipeBookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.slot_key, "@recipes");
        assert!(loaded.pretty);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = RecipeBookConfig::default();
        assert!(config.set("pretty", "maybe").is_err());
        assert!(config.set("slot-key", "  ").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, RecipeBookConfig::default());
    }
}
