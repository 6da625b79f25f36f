use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::errors::SettingsError;
use super::types::Settings;

pub const CONFIG_ENV_VAR: &str = "RELAYOUT_CONFIG";
pub const LAYOUT_FILE_ENV_VAR: &str = "RELAYOUT_LAYOUT_FILE";
const APP_DIR: &str = ".relayout";
const CONFIG_FILE: &str = "config.toml";
const LAYOUT_FILE: &str = "window_config.json";

/// Load settings from `$RELAYOUT_CONFIG` or `~/.relayout/config.toml`.
///
/// A missing file yields defaults. A file that exists but cannot be read,
/// parsed or validated is an error.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&settings_file_path())
}

pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        debug!(
            event = "core.settings.file_missing",
            path = %path.display()
        );
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| SettingsError::ReadFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    let settings: Settings = toml::from_str(&content).map_err(|e| SettingsError::ParseFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    settings.validate()?;

    info!(
        event = "core.settings.loaded",
        path = %path.display(),
        app_mappings = settings.apps.len()
    );
    Ok(settings)
}

pub fn settings_file_path() -> PathBuf {
    if let Ok(path_str) = std::env::var(CONFIG_ENV_VAR)
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }
    app_dir().join(CONFIG_FILE)
}

/// Resolve the layout document path.
///
/// Precedence: explicit override (CLI flag), `$RELAYOUT_LAYOUT_FILE`,
/// `layout_file` from settings, `~/.relayout/window_config.json`.
pub fn layout_file_path(override_path: Option<&Path>, settings: &Settings) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }

    if let Ok(path_str) = std::env::var(LAYOUT_FILE_ENV_VAR)
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    if let Some(path) = &settings.layout_file {
        return path.clone();
    }

    app_dir().join(LAYOUT_FILE)
}

fn app_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(APP_DIR),
        None => {
            tracing::error!(
                event = "core.settings.home_dir_not_found",
                fallback = ".",
                "Could not determine home directory - using current directory as fallback"
            );
            PathBuf::from(".").join(APP_DIR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = load_settings_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
layout_file = "/srv/layouts/desk.json"

[restore]
poll_attempts = 5
poll_interval_ms = 250

[apps]
"My Editor" = "myeditor"
"#,
        )
        .unwrap();

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(
            settings.layout_file,
            Some(PathBuf::from("/srv/layouts/desk.json"))
        );
        assert_eq!(settings.restore.poll_attempts, 5);
        assert_eq!(settings.restore.poll_interval_ms, 250);
        assert_eq!(settings.apps.get("My Editor").unwrap(), "myeditor");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[restore\npoll_attempts = ").unwrap();

        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, SettingsError::ParseFailed { .. }));
    }

    #[test]
    fn test_invalid_value_is_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[restore]\npoll_attempts = 0\n").unwrap();

        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn test_settings_file_path_env_override() {
        temp_env::with_var(CONFIG_ENV_VAR, Some("/tmp/custom.toml"), || {
            assert_eq!(settings_file_path(), PathBuf::from("/tmp/custom.toml"));
        });
    }

    #[test]
    fn test_settings_file_path_empty_env_var_uses_default() {
        temp_env::with_var(CONFIG_ENV_VAR, Some(""), || {
            let path = settings_file_path();
            assert!(path.ends_with("config.toml"));
            assert!(path.to_string_lossy().contains(".relayout"));
        });
    }

    #[test]
    fn test_layout_file_precedence() {
        let mut settings = Settings::default();
        settings.layout_file = Some(PathBuf::from("/from/settings.json"));

        temp_env::with_var(LAYOUT_FILE_ENV_VAR, Some("/from/env.json"), || {
            assert_eq!(
                layout_file_path(Some(Path::new("/from/flag.json")), &settings),
                PathBuf::from("/from/flag.json")
            );
            assert_eq!(
                layout_file_path(None, &settings),
                PathBuf::from("/from/env.json")
            );
        });

        temp_env::with_var_unset(LAYOUT_FILE_ENV_VAR, || {
            assert_eq!(
                layout_file_path(None, &settings),
                PathBuf::from("/from/settings.json")
            );
            let default = layout_file_path(None, &Settings::default());
            assert!(default.ends_with("window_config.json"));
        });
    }
}
