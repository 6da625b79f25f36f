mod errors;
mod loading;
mod types;

pub use errors::SettingsError;
pub use loading::{
    CONFIG_ENV_VAR, LAYOUT_FILE_ENV_VAR, layout_file_path, load_settings, load_settings_from,
    settings_file_path,
};
pub use types::{DEFAULT_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_MS, RestoreSettings, Settings};
