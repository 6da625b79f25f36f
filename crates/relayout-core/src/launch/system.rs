//! Launcher backed by the operating system.

use std::process::Command;

use tracing::debug;

use super::errors::LaunchError;
use super::traits::AppLauncher;

/// Starts applications on the current machine.
///
/// - `open_app`: `open -a <name>` on macOS; elsewhere the name is resolved
///   on `PATH` and spawned detached.
/// - `start`: the platform opener via the `open` crate (`start` on Windows,
///   `open` on macOS, `xdg-open` on Linux).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAppLauncher;

impl AppLauncher for SystemAppLauncher {
    fn name(&self) -> &'static str {
        "system"
    }

    #[cfg(target_os = "macos")]
    fn open_app(&self, app: &str) -> Result<(), LaunchError> {
        debug!(event = "core.launch.open_app_started", app = app);

        let output = Command::new("open")
            .arg("-a")
            .arg(app)
            .output()
            .map_err(|e| LaunchError::SpawnFailed {
                app: app.to_string(),
                message: format!("open exec failed: {}", e),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            // `open -a` exits 1 when LaunchServices cannot resolve the name
            Err(LaunchError::AppNotFound {
                app: app.to_string(),
            })
        }
    }

    #[cfg(not(target_os = "macos"))]
    fn open_app(&self, app: &str) -> Result<(), LaunchError> {
        debug!(event = "core.launch.open_app_started", app = app);

        let path = which::which(app).map_err(|_| LaunchError::AppNotFound {
            app: app.to_string(),
        })?;

        Command::new(&path)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .map(|_child| ())
            .map_err(|e| LaunchError::SpawnFailed {
                app: app.to_string(),
                message: e.to_string(),
            })
    }

    fn start(&self, app: &str) -> Result<(), LaunchError> {
        debug!(event = "core.launch.start_started", app = app);

        open::that_detached(app).map_err(|e| LaunchError::SpawnFailed {
            app: app.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_launcher_name() {
        assert_eq!(SystemAppLauncher.name(), "system");
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_open_app_unknown_binary_is_not_found() {
        let result = SystemAppLauncher.open_app("relayout-nonexistent-app-12345");
        assert!(matches!(result, Err(LaunchError::AppNotFound { .. })));
    }
}
