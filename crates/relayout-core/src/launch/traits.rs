//! Application launcher trait definition.

use super::errors::LaunchError;

/// Interface to whatever can start an application by name.
///
/// `open_app` is the name-based launcher used for the first attempts of a
/// launch plan; `start` is the OS-level fallback that hands the identifier
/// to the platform's generic opener.
pub trait AppLauncher {
    /// The canonical name of this launcher (e.g., "system").
    fn name(&self) -> &'static str;

    /// Launch an application by identifier.
    fn open_app(&self, app: &str) -> Result<(), LaunchError>;

    /// Launch through the OS-generic opener (`start`, `open`, `xdg-open`).
    fn start(&self, app: &str) -> Result<(), LaunchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockLauncher {
        installed: Vec<&'static str>,
    }

    impl AppLauncher for MockLauncher {
        fn name(&self) -> &'static str {
            "mock"
        }

        fn open_app(&self, app: &str) -> Result<(), LaunchError> {
            if self.installed.contains(&app) {
                Ok(())
            } else {
                Err(LaunchError::AppNotFound {
                    app: app.to_string(),
                })
            }
        }

        fn start(&self, app: &str) -> Result<(), LaunchError> {
            Err(LaunchError::SpawnFailed {
                app: app.to_string(),
                message: "no opener".to_string(),
            })
        }
    }

    #[test]
    fn test_mock_launcher_opens_installed_app() {
        let launcher = MockLauncher {
            installed: vec!["code"],
        };
        assert_eq!(launcher.name(), "mock");
        assert!(launcher.open_app("code").is_ok());
        assert!(launcher.open_app("steam").is_err());
        assert!(launcher.start("code").is_err());
    }
}
