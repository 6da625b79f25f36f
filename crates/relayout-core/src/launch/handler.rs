use tracing::{error, info, warn};

use super::traits::AppLauncher;
use super::types::{LaunchPlan, LaunchStrategy};

/// Result of walking a launch plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// A strategy reported success; later strategies were not tried
    Launched {
        strategy: LaunchStrategy,
        attempts: usize,
    },
    /// Every strategy failed (or the plan was empty)
    Failed { attempts: usize },
}

/// Try each attempt of `plan` in order, stopping at the first success.
pub fn launch_app(launcher: &dyn AppLauncher, plan: &LaunchPlan) -> LaunchOutcome {
    info!(
        event = "core.launch.started",
        app = plan.app_name(),
        launcher = launcher.name(),
        attempts = plan.attempts().len()
    );

    for (index, attempt) in plan.attempts().iter().enumerate() {
        let result = match attempt.strategy {
            LaunchStrategy::Start => launcher.start(&attempt.target),
            _ => launcher.open_app(&attempt.target),
        };

        match result {
            Ok(()) => {
                info!(
                    event = "core.launch.completed",
                    app = plan.app_name(),
                    strategy = %attempt.strategy,
                    target = %attempt.target
                );
                return LaunchOutcome::Launched {
                    strategy: attempt.strategy,
                    attempts: index + 1,
                };
            }
            Err(e) => {
                warn!(
                    event = "core.launch.attempt_failed",
                    app = plan.app_name(),
                    strategy = %attempt.strategy,
                    target = %attempt.target,
                    error = %e
                );
            }
        }
    }

    error!(
        event = "core.launch.failed",
        app = plan.app_name(),
        attempts = plan.attempts().len()
    );
    LaunchOutcome::Failed {
        attempts: plan.attempts().len(),
    }
}
