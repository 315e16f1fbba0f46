//! Configuration management.
//!
//! Scrapdex reads a small TOML file with three sections:
//!
//! - [`DatabaseConfig`] - data directory and catalog file names
//! - [`BrowserConfig`] - locale, search debounce, page size
//! - [`LoggingConfig`] - log level and optional log file
//!
//! All values have defaults, so an empty file (or `scrapdex init`) yields a
//! working setup pointed at `./data`. Values are validated on load; an
//! unknown locale or log level fails fast rather than surfacing later as a
//! half-configured browser session.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::catalog::Locale;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub data_dir: String,
    #[serde(default = "default_items_file")]
    pub items_file: String,
    #[serde(default = "default_bots_file")]
    pub bots_file: String,
    #[serde(default = "default_quests_file")]
    pub quests_file: String,
    #[serde(default = "default_workbenches_file")]
    pub workbenches_file: String,
    #[serde(default = "default_projects_file")]
    pub projects_file: String,
}

fn default_items_file() -> String {
    "items.json".to_string()
}

fn default_bots_file() -> String {
    "bots.json".to_string()
}

fn default_quests_file() -> String {
    "quests.json".to_string()
}

fn default_workbenches_file() -> String {
    "workbenches.json".to_string()
}

fn default_projects_file() -> String {
    "projects.json".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            items_file: default_items_file(),
            bots_file: default_bots_file(),
            quests_file: default_quests_file(),
            workbenches_file: default_workbenches_file(),
            projects_file: default_projects_file(),
        }
    }
}

impl DatabaseConfig {
    pub fn items_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.items_file)
    }

    pub fn bots_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.bots_file)
    }

    pub fn quests_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.quests_file)
    }

    pub fn workbenches_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.workbenches_file)
    }

    pub fn projects_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.projects_file)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Language code for item display names. Must be one of the supported set.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Delay between the last search input and view recomputation (ms).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Rows rendered per screenful in table layout; 0 renders everything.
    #[serde(default)]
    pub page_size: usize,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_debounce_ms() -> u64 {
    250
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            debounce_ms: default_debounce_ms(),
            page_size: 0,
        }
    }
}

impl BrowserConfig {
    /// Parsed locale. `validate` has already rejected unknown codes, so this
    /// only falls back for a config that never went through `load`.
    pub fn locale(&self) -> Locale {
        self.locale.parse().unwrap_or(Locale::En)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Load and validate a configuration file.
    pub async fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read config file {}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Write a default configuration file (used by `scrapdex init`).
    pub async fn create_default(path: &str) -> Result<()> {
        let serialized = toml::to_string_pretty(&Config::default())?;
        fs::write(path, serialized).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.data_dir.trim().is_empty() {
            return Err(anyhow!("database.data_dir must not be empty"));
        }
        if self.browser.locale.parse::<Locale>().is_err() {
            return Err(anyhow!(
                "browser.locale '{}' is not supported (expected one of: {})",
                self.browser.locale,
                Locale::ALL.map(|l| l.as_str()).join(", ")
            ));
        }
        if self.browser.debounce_ms > 5_000 {
            return Err(anyhow!(
                "browser.debounce_ms {} is too large (max 5000)",
                self.browser.debounce_ms
            ));
        }
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(anyhow!("logging.level '{}' is not a log level", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        Config::default().validate().expect("defaults valid");
    }

    #[test]
    fn default_config_round_trips_toml() {
        let serialized = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.database.data_dir, "data");
        assert_eq!(parsed.browser.debounce_ms, 250);
        assert_eq!(parsed.browser.locale(), Locale::En);
    }

    #[test]
    fn empty_file_uses_section_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.database.items_file, "items.json");
        assert_eq!(parsed.logging.level, "info");
    }

    #[test]
    fn unknown_locale_rejected() {
        let mut config = Config::default();
        config.browser.locale = "tlh".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_debounce_rejected() {
        let mut config = Config::default();
        config.browser.debounce_ms = 60_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn catalog_paths_join_data_dir() {
        let db = DatabaseConfig {
            data_dir: "/srv/scrapdex".to_string(),
            ..DatabaseConfig::default()
        };
        assert_eq!(db.items_path(), PathBuf::from("/srv/scrapdex/items.json"));
        assert_eq!(db.bots_path(), PathBuf::from("/srv/scrapdex/bots.json"));
    }
}
