use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::assistant::DEFAULT_REPLY_DELAY;
use crate::page::Page;

pub const REPLY_DELAY_ENV: &str = "FINBOARD_REPLY_DELAY_MS";

const DEFAULT_USER_NAME: &str = "Aryan Singh";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub reply_delay_ms: Option<u64>,
    #[serde(default)]
    pub start_page: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the user config directory, then apply env overrides.
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_override(std::env::var(REPLY_DELAY_ENV).ok().as_deref());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Config = serde_json::from_str(&config_content)
            .with_context(|| format!("Malformed config at {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(path, config_content)?;
        Ok(())
    }

    /// Parses `value` as milliseconds; unparseable values are ignored.
    pub fn apply_env_override(&mut self, value: Option<&str>) {
        if let Some(ms) = value.and_then(|v| v.trim().parse::<u64>().ok()) {
            self.reply_delay_ms = Some(ms);
        }
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REPLY_DELAY)
    }

    pub fn start_page(&self) -> Page {
        self.start_page
            .as_deref()
            .and_then(Page::parse)
            .unwrap_or_default()
    }

    pub fn user_name(&self) -> &str {
        self.user_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(DEFAULT_USER_NAME)
    }

    /// Up to two uppercase initials from the user name.
    pub fn user_initials(&self) -> String {
        self.user_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("finboard"))
    }

    fn get_config_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::new());
        assert_eq!(config.reply_delay(), Duration::from_millis(1500));
        assert_eq!(config.start_page(), Page::Dashboard);
        assert_eq!(config.user_name(), "Aryan Singh");
        assert_eq!(config.user_initials(), "AS");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            reply_delay_ms: Some(250),
            start_page: Some("/assistant".to_string()),
            user_name: Some("jo lee".to_string()),
        };

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.reply_delay(), Duration::from_millis(250));
        assert_eq!(loaded.start_page(), Page::Assistant);
        assert_eq!(loaded.user_initials(), "JL");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "start_page": "predictions" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.start_page(), Page::Predictions);
        assert_eq!(config.reply_delay_ms, None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_env_override() {
        let mut config = Config { reply_delay_ms: Some(900), ..Config::new() };

        config.apply_env_override(Some("abc"));
        assert_eq!(config.reply_delay_ms, Some(900));

        config.apply_env_override(Some(" 0 "));
        assert_eq!(config.reply_delay(), Duration::ZERO);

        config.apply_env_override(None);
        assert_eq!(config.reply_delay(), Duration::ZERO);
    }

    #[test]
    fn test_unknown_start_page_falls_back() {
        let config = Config { start_page: Some("settings".to_string()), ..Config::new() };
        assert_eq!(config.start_page(), Page::Dashboard);
    }
}
