//! Configuration file support for Nutri.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/nutri/config.toml`.

use crate::{get_default_catalog, Catalog, Error, Result, DEFAULT_GOAL};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub goal: GoalConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Daily calorie goal configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GoalConfig {
    #[serde(default = "default_daily_calories")]
    pub daily_calories: f64,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            daily_calories: default_daily_calories(),
        }
    }
}

/// Food catalog source
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON catalog file; the built-in catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn home_dir_fallback(suffix: &str) -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(suffix)
}

fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| home_dir_fallback(".local/share"));
    base.join("nutri")
}

fn default_daily_calories() -> f64 {
    DEFAULT_GOAL
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Reject goals that cannot drive the scorer
    pub fn validate(&self) -> Result<()> {
        let goal = self.goal.daily_calories;
        if !goal.is_finite() || goal < 0.0 {
            return Err(Error::Config(format!(
                "daily_calories must be a non-negative number, got {}",
                goal
            )));
        }
        Ok(())
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| home_dir_fallback(".config"));
        base.join("nutri").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// The configured catalog, or the built-in one
    pub fn catalog(&self) -> Result<Cow<'static, Catalog>> {
        match &self.catalog.path {
            Some(path) => Ok(Cow::Owned(Catalog::load_from(path)?)),
            None => Ok(Cow::Borrowed(get_default_catalog())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.goal.daily_calories, 2000.0);
        assert!(config.catalog.path.is_none());
        assert!(config.data.data_dir.ends_with("nutri"));
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.goal.daily_calories = 1800.0;
        config.save_to(&path).unwrap();

        let parsed = Config::load_from(&path).unwrap();
        assert_eq!(parsed.goal.daily_calories, 1800.0);
        assert_eq!(parsed.data.data_dir, config.data.data_dir);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[goal]
daily_calories = 2500.0
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.goal.daily_calories, 2500.0);
        assert!(config.catalog.path.is_none()); // default
    }

    #[test]
    fn test_negative_goal_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[goal]\ndaily_calories = -5.0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_catalog_defaults_to_builtin() {
        let config = Config::default();
        let catalog = config.catalog().unwrap();
        assert!(catalog.find("dal").is_some());
    }

    #[test]
    fn test_catalog_from_configured_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let foods = temp_dir.path().join("foods.json");
        std::fs::write(
            &foods,
            r#"[{"name":"Uttapam","serving_g":120,"calories":200,"protein":5,"carbs":32,"fat":6,"sugar":2}]"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.catalog.path = Some(foods);
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find("dal").is_none());
    }
}
