//! Window backend backed by the running desktop.
//!
//! Enumeration goes through xcap on every platform. xcap is read-only, so
//! geometry changes use the platform's native facility:
//!
//! - Windows: `SetWindowPos`
//! - macOS: System Events via `osascript`
//! - Linux: `wmctrl` (X11 / XWayland)

use tracing::{debug, info};

use super::errors::WindowError;
use super::traits::WindowBackend;
use super::types::WindowInfo;

/// Windows smaller than this in either dimension are treated as invisible
/// helper windows and skipped.
const MIN_WINDOW_EDGE: u32 = 10;

/// The desktop of the current session.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemWindowBackend;

impl WindowBackend for SystemWindowBackend {
    fn name(&self) -> &'static str {
        "system"
    }

    fn list_windows(&self) -> Result<Vec<WindowInfo>, WindowError> {
        debug!(event = "core.window.list_started");

        let windows = xcap::Window::all().map_err(|e| WindowError::EnumerationFailed {
            message: e.to_string(),
        })?;

        let result: Vec<WindowInfo> = windows
            .into_iter()
            .filter_map(|w| {
                let id = w.id().ok()?;
                let x = w.x().ok()?;
                let y = w.y().ok()?;
                let width = w.width().ok()?;
                let height = w.height().ok()?;

                if width < MIN_WINDOW_EDGE || height < MIN_WINDOW_EDGE {
                    return None;
                }

                Some(WindowInfo {
                    id,
                    title: w.title().ok().unwrap_or_default(),
                    app_name: w.app_name().ok().unwrap_or_default(),
                    x,
                    y,
                    width,
                    height,
                    is_minimized: w.is_minimized().ok().unwrap_or(false),
                })
            })
            .collect();

        debug!(event = "core.window.list_completed", count = result.len());
        Ok(result)
    }

    fn resize(&self, window: &WindowInfo, width: u32, height: u32) -> Result<(), WindowError> {
        info!(
            event = "core.window.resize_started",
            title = %window.title,
            width = width,
            height = height
        );
        platform::resize(window, width, height)?;
        info!(event = "core.window.resize_completed", title = %window.title);
        Ok(())
    }

    fn move_to(&self, window: &WindowInfo, x: i32, y: i32) -> Result<(), WindowError> {
        info!(
            event = "core.window.move_started",
            title = %window.title,
            x = x,
            y = y
        );
        platform::move_to(window, x, y)?;
        info!(event = "core.window.move_completed", title = %window.title);
        Ok(())
    }
}

#[cfg(target_os = "windows")]
mod platform {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{
        IsWindow, SET_WINDOW_POS_FLAGS, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER,
        SetWindowPos,
    };

    use super::{WindowError, WindowInfo, native_handle, signed_extent};

    pub(super) fn resize(window: &WindowInfo, width: u32, height: u32) -> Result<(), WindowError> {
        let cx = signed_extent(window, width)?;
        let cy = signed_extent(window, height)?;
        set_window_pos(window, 0, 0, cx, cy, SWP_NOMOVE)
    }

    pub(super) fn move_to(window: &WindowInfo, x: i32, y: i32) -> Result<(), WindowError> {
        set_window_pos(window, x, y, 0, 0, SWP_NOSIZE)
    }

    fn set_window_pos(
        window: &WindowInfo,
        x: i32,
        y: i32,
        cx: i32,
        cy: i32,
        keep: SET_WINDOW_POS_FLAGS,
    ) -> Result<(), WindowError> {
        let hwnd = HWND(native_handle(window));

        // SAFETY: IsWindow accepts any handle value, and SetWindowPos is only
        // called on a handle IsWindow reported as live.
        unsafe {
            if !IsWindow(hwnd).as_bool() {
                return Err(WindowError::WindowNotFound {
                    title: window.title.clone(),
                });
            }

            SetWindowPos(
                hwnd,
                HWND(0),
                x,
                y,
                cx,
                cy,
                keep | SWP_NOZORDER | SWP_NOACTIVATE,
            )
            .map_err(|e| WindowError::GeometryFailed {
                title: window.title.clone(),
                message: e.to_string(),
            })
        }
    }
}

#[cfg(target_os = "macos")]
mod platform {
    use super::{WindowError, WindowInfo, applescript_escape};

    pub(super) fn resize(window: &WindowInfo, width: u32, height: u32) -> Result<(), WindowError> {
        run_for_window(window, &format!("set size of w to {{{}, {}}}", width, height))
    }

    pub(super) fn move_to(window: &WindowInfo, x: i32, y: i32) -> Result<(), WindowError> {
        run_for_window(window, &format!("set position of w to {{{}, {}}}", x, y))
    }

    fn run_for_window(window: &WindowInfo, action: &str) -> Result<(), WindowError> {
        let title = applescript_escape(&window.title);
        let script = format!(
            r#"tell application "System Events"
    repeat with proc in (every process whose background only is false)
        if exists (window "{title}" of proc) then
            set w to window "{title}" of proc
            {action}
            return
        end if
    end repeat
end tell
error "window not found""#
        );

        let output = std::process::Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output()
            .map_err(|e| WindowError::GeometryFailed {
                title: window.title.clone(),
                message: format!("osascript exec failed: {}", e),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(WindowError::GeometryFailed {
                title: window.title.clone(),
                message: format!("osascript exit {}: {}", output.status, stderr.trim()),
            })
        }
    }
}

#[cfg(target_os = "linux")]
mod platform {
    use super::{WindowError, WindowInfo};

    const WMCTRL: &str = "wmctrl";

    pub(super) fn resize(window: &WindowInfo, width: u32, height: u32) -> Result<(), WindowError> {
        run_wmctrl(window, &format!("0,-1,-1,{},{}", width, height))
    }

    pub(super) fn move_to(window: &WindowInfo, x: i32, y: i32) -> Result<(), WindowError> {
        run_wmctrl(window, &format!("0,{},{},-1,-1", x, y))
    }

    fn run_wmctrl(window: &WindowInfo, geometry: &str) -> Result<(), WindowError> {
        which::which(WMCTRL).map_err(|_| WindowError::ToolNotFound {
            tool: WMCTRL.to_string(),
        })?;

        // -F: match the title exactly instead of by substring
        let output = std::process::Command::new(WMCTRL)
            .args(["-F", "-r", window.title.as_str(), "-e", geometry])
            .output()
            .map_err(|e| WindowError::GeometryFailed {
                title: window.title.clone(),
                message: format!("wmctrl exec failed: {}", e),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(WindowError::GeometryFailed {
                title: window.title.clone(),
                message: format!("wmctrl exit {}: {}", output.status, stderr.trim()),
            })
        }
    }
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
mod platform {
    use super::{WindowError, WindowInfo};

    pub(super) fn resize(_: &WindowInfo, _: u32, _: u32) -> Result<(), WindowError> {
        Err(WindowError::UnsupportedPlatform)
    }

    pub(super) fn move_to(_: &WindowInfo, _: i32, _: i32) -> Result<(), WindowError> {
        Err(WindowError::UnsupportedPlatform)
    }
}

/// The native handle of an enumerated window. On Windows xcap reports the
/// HWND as the window id.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
fn native_handle(window: &WindowInfo) -> isize {
    window.id as isize
}

/// A saved width or height as the signed extent native APIs take.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
fn signed_extent(window: &WindowInfo, value: u32) -> Result<i32, WindowError> {
    i32::try_from(value).map_err(|_| WindowError::GeometryFailed {
        title: window.title.clone(),
        message: format!("size {} is larger than {}", value, i32::MAX),
    })
}

/// Escape a string for use inside an AppleScript string literal.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
