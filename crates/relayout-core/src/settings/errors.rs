use crate::errors::RelayoutError;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {message}")]
    ParseFailed { path: String, message: String },

    #[error("Invalid setting '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl RelayoutError for SettingsError {
    fn error_code(&self) -> &'static str {
        match self {
            SettingsError::ReadFailed { .. } => "SETTINGS_READ_FAILED",
            SettingsError::ParseFailed { .. } => "SETTINGS_PARSE_FAILED",
            SettingsError::InvalidValue { .. } => "SETTINGS_INVALID_VALUE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            SettingsError::ParseFailed { .. } | SettingsError::InvalidValue { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_parse_failed() {
        let error = SettingsError::ParseFailed {
            path: "/tmp/config.toml".to_string(),
            message: "expected `=`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse settings file '/tmp/config.toml': expected `=`"
        );
        assert_eq!(error.error_code(), "SETTINGS_PARSE_FAILED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_read_failed_has_source() {
        let error = SettingsError::ReadFailed {
            path: "/tmp/config.toml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.source().is_some());
        assert!(!error.is_user_error());
    }
}
