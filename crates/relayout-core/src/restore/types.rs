use std::time::Duration;

use serde::Serialize;

use crate::launch::LaunchStrategy;
use crate::settings::{DEFAULT_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_MS, RestoreSettings};

/// Poll budget for windows that have to be launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreOptions {
    pub poll_attempts: u32,
    pub poll_interval: Duration,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        Self {
            poll_attempts: DEFAULT_POLL_ATTEMPTS,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl From<&RestoreSettings> for RestoreOptions {
    fn from(settings: &RestoreSettings) -> Self {
        Self {
            poll_attempts: settings.poll_attempts,
            poll_interval: settings.poll_interval(),
        }
    }
}

impl RestoreOptions {
    pub fn with_poll_attempts(mut self, attempts: u32) -> Self {
        self.poll_attempts = attempts.max(1);
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

/// Where the positioned window came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowSource {
    AlreadyOpen,
    Launched {
        strategy: LaunchStrategy,
        /// Poll attempts until the window showed up
        waited_attempts: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RestoreStatus {
    Positioned { source: WindowSource },
    /// Not open and the record's open method forbids launching
    LaunchSkipped,
    LaunchFailed { attempts: usize },
    WindowNotFound { waited_attempts: u32 },
    PositionFailed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestoreOutcome {
    pub title: String,
    #[serde(flatten)]
    pub status: RestoreStatus,
}

impl RestoreOutcome {
    pub fn is_positioned(&self) -> bool {
        matches!(self.status, RestoreStatus::Positioned { .. })
    }

    /// Short human-readable description of the status.
    pub fn describe(&self) -> String {
        match &self.status {
            RestoreStatus::Positioned {
                source: WindowSource::AlreadyOpen,
            } => "positioned".to_string(),
            RestoreStatus::Positioned {
                source:
                    WindowSource::Launched {
                        strategy,
                        waited_attempts,
                    },
            } => format!(
                "launched ({}), appeared after {} attempt(s), positioned",
                strategy, waited_attempts
            ),
            RestoreStatus::LaunchSkipped => "not open, launching disabled".to_string(),
            RestoreStatus::LaunchFailed { attempts } => {
                format!("all {} launch attempts failed", attempts)
            }
            RestoreStatus::WindowNotFound { waited_attempts } => {
                format!("window did not appear after {} attempt(s)", waited_attempts)
            }
            RestoreStatus::PositionFailed { message } => {
                format!("failed to position: {}", message)
            }
        }
    }
}

/// Per-window results of applying a layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RestoreReport {
    pub outcomes: Vec<RestoreOutcome>,
}

impl RestoreReport {
    pub fn positioned_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_positioned()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.positioned_count()
    }

    pub fn status_message(&self) -> String {
        if self.outcomes.is_empty() {
            "No saved layouts to apply.".to_string()
        } else {
            format!(
                "Applied layout: {} of {} windows positioned",
                self.positioned_count(),
                self.outcomes.len()
            )
        }
    }
}
