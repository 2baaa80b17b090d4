//! Config persistence and path resolution for `Config`.
//!
//! Covers:
//! - `load` / `load_from` (YAML file I/O, creating defaults when missing)
//! - `save` / `save_to` (atomic write)
//! - XDG-compliant path helpers (`config_path`, `config_dir`)

use super::config_struct::Config;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load configuration from the default path, or create the default file
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or create a default file there.
    ///
    /// Duplicate override entries in a hand-edited file are repaired (the
    /// first entry for a category is kept) and logged as a warning.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Config path: {:?}", path);

        if !path.exists() {
            log::info!("Config file not found, creating default at {:?}", path);
            let config = Self::default();
            if let Err(e) = config.save_to(path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            log::info!("Default config created successfully");
            return Ok(config);
        }

        log::info!("Loading existing config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        let mut config: Config = serde_yaml_ng::from_str(&contents)?;

        if let Err(e) = config.validate_and_repair() {
            log::warn!("{e}");
        }

        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;

        log::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("skipprefs")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/skipprefs
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("skipprefs")
            } else {
                PathBuf::from(".")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, CategorySelection, CategorySkipOption};
    use tempfile::TempDir;

    #[test]
    fn test_load_creates_default_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("config.yaml");

        let config = Config::load_from(&path).expect("load should create defaults");
        assert_eq!(config, Config::default());
        assert!(path.exists(), "default config should be written to disk");
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.ensure_channel("chanA");
        config
            .channel_specific_settings
            .get_mut("chanA")
            .unwrap()
            .category_selections
            .push(CategorySelection::new(
                Category::Intro,
                CategorySkipOption::ManualSkip,
            ));
        config.save_to(&path).expect("save");
        assert!(!path.with_extension("yaml.tmp").exists());

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "log_level: debug\n").unwrap();

        let config = Config::load_from(&path).expect("load");
        assert_eq!(config.category_selections, crate::defaults::category_selections());
        assert_eq!(config.bar_types, crate::defaults::bar_types());
        assert!(config.channel_specific_settings.is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_a_parse_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "category_selections: [name: sponsor\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_repairs_duplicate_entries() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.yaml");
        fs::write(
            &path,
            "category_selections:\n  - name: sponsor\n    option: manual_skip\n  - name: sponsor\n    option: auto_skip\n",
        )
        .unwrap();

        let config = Config::load_from(&path).expect("load");
        assert_eq!(
            config.category_selections,
            vec![CategorySelection::new(
                Category::Sponsor,
                CategorySkipOption::ManualSkip
            )]
        );
    }
}
