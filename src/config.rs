//! Configuration handling for the request builder

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;
pub const DEFAULT_RESULTS_TABLE: &str = "warehouse.results";

/// User configuration for the builder
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuilderConfig {
    /// How long notices stay on screen
    pub toast_duration_ms: Option<u64>,
    /// Table named in the SQL preview
    pub results_table: Option<String>,
    /// Field names offered in pickers after the built-in list
    pub extra_fields: Option<Vec<String>>,
}

impl BuilderConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "warehouse", "warehouse-request-tui")
    }

    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("warehouse-request-tui.log"))
    }

    /// Load configuration from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: BuilderConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS))
    }

    pub fn results_table(&self) -> &str {
        self.results_table
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_RESULTS_TABLE)
    }

    pub fn extra_fields(&self) -> &[String] {
        self.extra_fields.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("warehouse-request-tui-{}-{name}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = BuilderConfig::default();
        assert!(config.toast_duration_ms.is_none());
        assert!(config.results_table.is_none());
        assert!(config.extra_fields.is_none());
        assert_eq!(config.toast_duration(), Duration::from_millis(3000));
        assert_eq!(config.results_table(), "warehouse.results");
        assert!(config.extra_fields().is_empty());
    }

    #[test]
    fn test_empty_results_table_uses_default() {
        let config = BuilderConfig {
            results_table: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.results_table(), DEFAULT_RESULTS_TABLE);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: BuilderConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.toast_duration_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Unknown keys are ignored
        let json = r#"{"toast_duration_ms": 500, "theme": "dark", "extra_fields": ["Result_Book"]}"#;
        let parsed: BuilderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.toast_duration(), Duration::from_millis(500));
        assert_eq!(parsed.extra_fields(), ["Result_Book".to_string()]);
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = temp_config_path("missing");
        let config = BuilderConfig::load_from(&path).unwrap();
        assert!(config.results_table.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("roundtrip");
        let config = BuilderConfig {
            results_table: Some("risk.results_v53".to_string()),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = BuilderConfig::load_from(&path).unwrap();
        assert_eq!(loaded.results_table(), "risk.results_v53");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_from_invalid_json_fails() {
        let path = temp_config_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let err = BuilderConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_config_path_returns_option() {
        let _path = BuilderConfig::config_path();
    }
}
