use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One way of turning an app name into a launch invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchStrategy {
    /// The app name as saved
    Raw,
    /// Spaces replaced with hyphens ("steelseries gg" -> "steelseries-gg")
    Hyphenated,
    /// Spaces removed ("mobile connect" -> "mobileconnect")
    Concatenated,
    /// The OS-generic opener
    Start,
}

impl LaunchStrategy {
    /// Canonical fallback order.
    pub const ALL: [LaunchStrategy; 4] = [
        LaunchStrategy::Raw,
        LaunchStrategy::Hyphenated,
        LaunchStrategy::Concatenated,
        LaunchStrategy::Start,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchStrategy::Raw => "raw",
            LaunchStrategy::Hyphenated => "hyphenated",
            LaunchStrategy::Concatenated => "concatenated",
            LaunchStrategy::Start => "start",
        }
    }

    /// The identifier this strategy hands to the launcher.
    pub fn target_for(&self, app_name: &str) -> String {
        match self {
            LaunchStrategy::Raw | LaunchStrategy::Start => app_name.to_string(),
            LaunchStrategy::Hyphenated => app_name.replace(' ', "-"),
            LaunchStrategy::Concatenated => app_name.replace(' ', ""),
        }
    }
}

impl fmt::Display for LaunchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a saved record wants its application launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMethod {
    /// Full fallback chain in canonical order
    #[default]
    Auto,
    /// Try this strategy first, then the rest in canonical order
    Prefer(LaunchStrategy),
    /// Never launch; only reposition windows that are already open
    Never,
}

impl OpenMethod {
    pub const AUTO: &'static str = "auto";
    pub const NEVER: &'static str = "none";
}

impl FromStr for OpenMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | OpenMethod::AUTO => Ok(OpenMethod::Auto),
            OpenMethod::NEVER => Ok(OpenMethod::Never),
            other => LaunchStrategy::ALL
                .into_iter()
                .find(|strategy| strategy.as_str() == other)
                .map(OpenMethod::Prefer)
                .ok_or_else(|| {
                    format!(
                        "unknown open method '{}' (expected auto, none, raw, hyphenated, concatenated or start)",
                        s
                    )
                }),
        }
    }
}

impl fmt::Display for OpenMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenMethod::Auto => f.write_str(OpenMethod::AUTO),
            OpenMethod::Prefer(strategy) => f.write_str(strategy.as_str()),
            OpenMethod::Never => f.write_str(OpenMethod::NEVER),
        }
    }
}

/// A single launch invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchAttempt {
    pub strategy: LaunchStrategy,
    pub target: String,
}

/// Ordered launch attempts for one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    app_name: String,
    attempts: Vec<LaunchAttempt>,
}

impl LaunchPlan {
    pub fn new(app_name: impl Into<String>, method: OpenMethod) -> Self {
        let app_name = app_name.into();

        let order: Vec<LaunchStrategy> = match method {
            OpenMethod::Auto => LaunchStrategy::ALL.to_vec(),
            OpenMethod::Prefer(first) => std::iter::once(first)
                .chain(LaunchStrategy::ALL.into_iter().filter(|s| *s != first))
                .collect(),
            OpenMethod::Never => Vec::new(),
        };

        let attempts = order
            .into_iter()
            .map(|strategy| LaunchAttempt {
                strategy,
                target: strategy.target_for(&app_name),
            })
            .collect();

        Self { app_name, attempts }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn attempts(&self) -> &[LaunchAttempt] {
        &self.attempts
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }
}
