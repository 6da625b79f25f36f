use serde::{Deserialize, Serialize};

use crate::launch::OpenMethod;

/// Persisted geometry and identity for one tracked window.
///
/// The title is the key of the layout document, so it is not repeated
/// inside the serialized value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    #[serde(skip)]
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Normalized application name used for launching
    pub app_name: String,
    /// Title the window had when captured; second lookup key on restore
    #[serde(default)]
    pub original_title: String,
    /// Only move the window on restore, never resize it
    #[serde(default)]
    pub position_only: bool,
    #[serde(default = "default_open_method")]
    pub open_method: String,
}

fn default_open_method() -> String {
    OpenMethod::AUTO.to_string()
}

impl WindowRecord {
    /// Parsed `open_method`; unknown strings fall back to `Auto`.
    pub fn open_method(&self) -> OpenMethod {
        match self.open_method.parse() {
            Ok(method) => method,
            Err(message) => {
                tracing::warn!(
                    event = "core.layout.open_method_invalid",
                    title = %self.title,
                    open_method = %self.open_method,
                    error = %message
                );
                OpenMethod::Auto
            }
        }
    }

    /// The original title, when it differs from the key title.
    pub fn alternate_title(&self) -> Option<&str> {
        if self.original_title.is_empty() || self.original_title == self.title {
            None
        } else {
            Some(&self.original_title)
        }
    }
}
