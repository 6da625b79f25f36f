use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::errors::SettingsError;

pub const DEFAULT_POLL_ATTEMPTS: u32 = 10;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Tool configuration read from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Layout document location; `None` means the default under the home dir
    pub layout_file: Option<PathBuf>,
    pub restore: RestoreSettings,
    /// Extra title-prefix -> app name mappings, layered over the built-ins
    pub apps: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestoreSettings {
    pub poll_attempts: u32,
    pub poll_interval_ms: u64,
}

impl Default for RestoreSettings {
    fn default() -> Self {
        Self {
            poll_attempts: DEFAULT_POLL_ATTEMPTS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl RestoreSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.restore.poll_attempts == 0 {
            return Err(SettingsError::InvalidValue {
                key: "restore.poll_attempts".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if let Some((prefix, _)) = self.apps.iter().find(|(_, app)| app.trim().is_empty()) {
            return Err(SettingsError::InvalidValue {
                key: format!("apps.{}", prefix),
                message: "app name must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.restore.poll_attempts, 10);
        assert_eq!(settings.restore.poll_interval(), Duration::from_secs(1));
        assert!(settings.layout_file.is_none());
        assert!(settings.apps.is_empty());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let mut settings = Settings::default();
        settings.restore.poll_attempts = 0;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("restore.poll_attempts"));
    }

    #[test]
    fn test_empty_app_mapping_rejected() {
        let mut settings = Settings::default();
        settings
            .apps
            .insert("My Editor".to_string(), "  ".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("[restore]\npoll_attempts = 3\n").unwrap();
        assert_eq!(settings.restore.poll_attempts, 3);
        assert_eq!(settings.restore.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    }
}
