mod errors;
mod handler;
mod system;
mod traits;
mod types;

pub use errors::LaunchError;
pub use handler::{LaunchOutcome, launch_app};
pub use system::SystemAppLauncher;
pub use traits::AppLauncher;
pub use types::{LaunchAttempt, LaunchPlan, LaunchStrategy, OpenMethod};
