use crate::errors::RelayoutError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Failed to enumerate windows: {message}")]
    EnumerationFailed { message: String },

    #[error("Window not found: '{title}'")]
    WindowNotFound { title: String },

    #[error("Failed to change geometry of '{title}': {message}")]
    GeometryFailed { title: String, message: String },

    #[error("Window geometry tool not found: {tool}")]
    ToolNotFound { tool: String },

    #[error("Moving windows is not supported on this platform")]
    UnsupportedPlatform,
}

impl RelayoutError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
            WindowError::WindowNotFound { .. } => "WINDOW_NOT_FOUND",
            WindowError::GeometryFailed { .. } => "WINDOW_GEOMETRY_FAILED",
            WindowError::ToolNotFound { .. } => "WINDOW_TOOL_NOT_FOUND",
            WindowError::UnsupportedPlatform => "WINDOW_UNSUPPORTED_PLATFORM",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            WindowError::WindowNotFound { .. } | WindowError::ToolNotFound { .. }
        )
    }
}
