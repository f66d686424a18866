//! Configuration file support for lunchpick.
//!
//! Configuration is loaded from `~/.config/lunchpick/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/lunchpick/config.toml
//! stores_file = "~/lunch/stores.json"
//! avoid_repeat = true
//! show_history = false
//! placeholder_image = "https://placehold.co/800x420?text=store"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::store::StoreSource;

/// Environment variable naming the store data file
pub const STORES_ENV: &str = "LUNCHPICK_STORES";

/// Image shown when a store has none
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://placehold.co/800x420?text=store";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// JSON file with the store list
    pub stores_file: Option<PathBuf>,

    /// Whether picks avoid repeats until every store was chosen once
    pub avoid_repeat: Option<bool>,

    /// Whether the history panel is open at startup
    pub show_history: Option<bool>,

    /// Image URL used when a store has no usable image
    pub placeholder_image: Option<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lunchpick")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, stores_file: Option<PathBuf>, no_avoid_repeat: bool) -> Self {
        if stores_file.is_some() {
            self.stores_file = stores_file;
        }
        if no_avoid_repeat {
            self.avoid_repeat = Some(false);
        }
        self
    }

    /// Apply environment variables on top of the file values.
    pub fn with_env(self) -> Self {
        self.with_env_value(std::env::var(STORES_ENV).ok())
    }

    fn with_env_value(mut self, stores_file: Option<String>) -> Self {
        if let Some(path) = stores_file.filter(|v| !v.is_empty()) {
            self.stores_file = Some(PathBuf::from(path));
        }
        self
    }

    /// Where to load stores from, falling back to the bundled sample list.
    pub fn store_source(&self) -> StoreSource {
        self.stores_file
            .as_deref()
            .map(|path| StoreSource::File(expand_home(path)))
            .unwrap_or(StoreSource::Bundled)
    }

    pub fn avoid_repeat(&self) -> bool {
        self.avoid_repeat.unwrap_or(true)
    }

    pub fn show_history(&self) -> bool {
        self.show_history.unwrap_or(false)
    }

    pub fn placeholder_image(&self) -> &str {
        self.placeholder_image
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(DEFAULT_PLACEHOLDER_IMAGE)
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.stores_file.is_none());
        assert!(config.avoid_repeat());
        assert!(!config.show_history());
        assert_eq!(config.placeholder_image(), DEFAULT_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            stores_file = "/tmp/stores.json"
            avoid_repeat = false
            show_history = true
            placeholder_image = "https://example.com/none.png"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.stores_file, Some(PathBuf::from("/tmp/stores.json")));
        assert!(!config.avoid_repeat());
        assert!(config.show_history());
        assert_eq!(config.placeholder_image(), "https://example.com/none.png");
    }

    #[test]
    fn test_invalid_config_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("lunchpick-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "avoid_repeat = \"sometimes\"").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = Config {
            stores_file: Some(PathBuf::from("/from/config.json")),
            avoid_repeat: Some(true),
            ..Default::default()
        }
        .with_overrides(Some(PathBuf::from("/from/cli.json")), true);

        assert_eq!(config.stores_file, Some(PathBuf::from("/from/cli.json")));
        assert!(!config.avoid_repeat());
    }

    #[test]
    fn test_store_source_precedence() {
        let config = Config::default();
        assert_eq!(config.store_source(), StoreSource::Bundled);
        assert_eq!(
            config.clone().with_env_value(Some(String::new())).store_source(),
            StoreSource::Bundled
        );

        let file = Config {
            stores_file: Some(PathBuf::from("/file/stores.json")),
            ..Default::default()
        };
        assert_eq!(
            file.store_source(),
            StoreSource::File(PathBuf::from("/file/stores.json"))
        );

        let env = file.with_env_value(Some("/env/stores.json".to_string()));
        assert_eq!(
            env.store_source(),
            StoreSource::File(PathBuf::from("/env/stores.json"))
        );

        let cli = env.with_overrides(Some(PathBuf::from("/cli/stores.json")), false);
        assert_eq!(
            cli.store_source(),
            StoreSource::File(PathBuf::from("/cli/stores.json"))
        );
    }
}
