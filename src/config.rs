//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default contact endpoint
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/contact";
/// Default bound on a single submission
const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Environment variable overriding the endpoint
pub const ENDPOINT_ENV: &str = "ATELIER_CONTACT_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Contact endpoint URL
    pub endpoint: Option<String>,
    /// Submission timeout in milliseconds
    pub timeout_ms: Option<u64>,
    /// Locale of the built-in text table ("en", "fr")
    pub locale: Option<String>,
    /// JSON file with text overrides
    pub locale_overrides: Option<PathBuf>,
    /// Skip the brand splash
    pub skip_splash: Option<bool>,
}

/// Settings after defaults and environment overrides are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
    pub endpoint: String,
    pub timeout: Duration,
    pub locale: String,
    pub locale_overrides: Option<PathBuf>,
    pub skip_splash: bool,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "atelier", "atelier-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file next to the app's local data; the terminal belongs to the UI
    pub fn log_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "atelier", "atelier-tui")
            .map(|dirs| dirs.data_local_dir().join("atelier-tui.log"))
    }

    /// Open `path` for appending, creating its directory if needed
    pub fn open_log(path: &Path) -> Result<File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open {}", path.display()))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Apply defaults and the endpoint environment override
    pub fn resolve(&self) -> ContactSettings {
        self.resolve_with_env(std::env::var(ENDPOINT_ENV).ok())
    }

    fn resolve_with_env(&self, env_endpoint: Option<String>) -> ContactSettings {
        let endpoint = env_endpoint
            .filter(|e| !e.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        // A zero timeout would fail every submission immediately
        let timeout_ms = match self.timeout_ms {
            Some(0) | None => DEFAULT_TIMEOUT_MS,
            Some(ms) => ms,
        };

        ContactSettings {
            endpoint,
            timeout: Duration::from_millis(timeout_ms),
            locale: self.locale.clone().unwrap_or_else(|| "en".to_string()),
            locale_overrides: self.locale_overrides.clone(),
            skip_splash: self.skip_splash.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.timeout_ms.is_none());
        assert!(config.locale.is_none());
        assert!(config.locale_overrides.is_none());
        assert!(config.skip_splash.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            endpoint: Some("https://atelier.example/api/contact".to_string()),
            timeout_ms: Some(2500),
            locale: Some("fr".to_string()),
            locale_overrides: Some(PathBuf::from("/tmp/texts.json")),
            skip_splash: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.endpoint,
            Some("https://atelier.example/api/contact".to_string())
        );
        assert_eq!(parsed.timeout_ms, Some(2500));
        assert_eq!(parsed.locale, Some("fr".to_string()));
        assert_eq!(parsed.locale_overrides, Some(PathBuf::from("/tmp/texts.json")));
        assert_eq!(parsed.skip_splash, Some(true));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.endpoint.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"locale": "fr", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.locale, Some("fr".to_string()));
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = TuiConfig::default().resolve_with_env(None);
        assert_eq!(
            settings,
            ContactSettings {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
                locale: "en".to_string(),
                locale_overrides: None,
                skip_splash: false,
            }
        );
    }

    #[test]
    fn test_resolve_env_overrides_file() {
        let config = TuiConfig {
            endpoint: Some("http://from-file/api/contact".to_string()),
            ..Default::default()
        };
        let settings = config.resolve_with_env(Some("http://from-env/api/contact".to_string()));
        assert_eq!(settings.endpoint, "http://from-env/api/contact");
    }

    #[test]
    fn test_resolve_blank_env_is_ignored() {
        let config = TuiConfig {
            endpoint: Some("http://from-file/api/contact".to_string()),
            ..Default::default()
        };
        let settings = config.resolve_with_env(Some("  ".to_string()));
        assert_eq!(settings.endpoint, "http://from-file/api/contact");
    }

    #[test]
    fn test_resolve_zero_timeout_uses_default() {
        let config = TuiConfig {
            timeout_ms: Some(0),
            ..Default::default()
        };
        let settings = config.resolve_with_env(None);
        assert_eq!(settings.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }

    #[test]
    fn test_resolve_custom_timeout() {
        let config = TuiConfig {
            timeout_ms: Some(750),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_with_env(None).timeout,
            Duration::from_millis(750)
        );
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    fn scratch_file(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("atelier-tui-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_from_reads_file() {
        let path = scratch_file(r#"{"endpoint": "https://atelier.example/api/contact"}"#);
        let config = TuiConfig::load_from(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(
            config.endpoint.as_deref(),
            Some("https://atelier.example/api/contact")
        );
    }

    #[test]
    fn test_bad_json_error_names_the_file() {
        let path = scratch_file("{ not json");
        let err = TuiConfig::load_from(&path).unwrap_err();
        fs::remove_file(&path).ok();
        let message = format!("{err:#}");
        assert!(message.contains(&path.display().to_string()), "{message}");
        assert!(message.starts_with("invalid config in"), "{message}");
    }

    #[test]
    fn test_missing_file_error_names_the_file() {
        let path = std::env::temp_dir().join(format!("atelier-tui-{}.json", uuid::Uuid::new_v4()));
        let err = TuiConfig::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains(&path.display().to_string()));
    }

    #[test]
    fn test_open_log_creates_directory_and_appends() {
        use std::io::Write;

        let dir = std::env::temp_dir().join(format!("atelier-tui-{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("atelier-tui.log");

        writeln!(TuiConfig::open_log(&path).unwrap(), "first").unwrap();
        writeln!(TuiConfig::open_log(&path).unwrap(), "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        fs::remove_dir_all(&dir).ok();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_log_path_is_a_log_file() {
        if let Some(path) = TuiConfig::log_path() {
            assert!(path.ends_with("atelier-tui.log"));
        }
    }

    #[test]
    fn test_load_returns_ok_or_reports_bad_file() {
        // Depends on whether a config file exists on this machine
        let _ = TuiConfig::load();
    }
}
