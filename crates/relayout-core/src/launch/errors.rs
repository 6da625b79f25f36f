//! Application launch error types.

use crate::errors::RelayoutError;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Application not found: {app}")]
    AppNotFound { app: String },

    #[error("Failed to launch '{app}': {message}")]
    SpawnFailed { app: String, message: String },
}

impl RelayoutError for LaunchError {
    fn error_code(&self) -> &'static str {
        match self {
            LaunchError::AppNotFound { .. } => "LAUNCH_APP_NOT_FOUND",
            LaunchError::SpawnFailed { .. } => "LAUNCH_SPAWN_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, LaunchError::AppNotFound { .. })
    }
}
