use crate::errors::RelayoutError;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Failed to serialize layout: {message}")]
    SerializeFailed { message: String },

    #[error("Failed to save layout file '{path}': {message}")]
    SaveFailed { path: String, message: String },

    #[error("Layout file '{path}' could not be read or backed up; it was left unchanged")]
    FileKept { path: String },
}

impl RelayoutError for LayoutError {
    fn error_code(&self) -> &'static str {
        match self {
            LayoutError::SerializeFailed { .. } => "LAYOUT_SERIALIZE_FAILED",
            LayoutError::SaveFailed { .. } => "LAYOUT_SAVE_FAILED",
            LayoutError::FileKept { .. } => "LAYOUT_FILE_KEPT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_failed() {
        let error = LayoutError::SaveFailed {
            path: "/ro/window_config.json".to_string(),
            message: "read-only file system".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to save layout file '/ro/window_config.json': read-only file system"
        );
        assert_eq!(error.error_code(), "LAYOUT_SAVE_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_file_kept() {
        let error = LayoutError::FileKept {
            path: "window_config.json".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Layout file 'window_config.json' could not be read or backed up; it was left unchanged"
        );
        assert_eq!(error.error_code(), "LAYOUT_FILE_KEPT");
    }
}
