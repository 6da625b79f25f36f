//! Window service trait definition.

use super::errors::WindowError;
use super::types::WindowInfo;

/// Interface to the desktop's window list and window geometry.
///
/// The system implementation talks to the OS; tests substitute an
/// in-memory desktop.
pub trait WindowBackend {
    /// The canonical name of this backend (e.g., "system").
    fn name(&self) -> &'static str;

    /// List all top-level windows.
    fn list_windows(&self) -> Result<Vec<WindowInfo>, WindowError>;

    /// All windows whose title is exactly `title`.
    fn find_windows_with_title(&self, title: &str) -> Result<Vec<WindowInfo>, WindowError> {
        Ok(self
            .list_windows()?
            .into_iter()
            .filter(|w| w.title == title)
            .collect())
    }

    /// Resize a window, keeping its position.
    fn resize(&self, window: &WindowInfo, width: u32, height: u32) -> Result<(), WindowError>;

    /// Move a window, keeping its size.
    fn move_to(&self, window: &WindowInfo, x: i32, y: i32) -> Result<(), WindowError>;
}
