use serde::{Deserialize, Serialize};

/// A live top-level window as reported by the window service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInfo {
    /// Platform window identifier
    pub id: u32,
    /// Window title
    pub title: String,
    /// Application name that owns this window
    pub app_name: String,
    /// Window x position
    pub x: i32,
    /// Window y position
    pub y: i32,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Whether the window is minimized
    pub is_minimized: bool,
}

impl WindowInfo {
    /// True when the title has at least one non-whitespace character.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}
