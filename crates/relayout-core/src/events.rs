//! Application lifecycle events.

use tracing::{error, info, warn};

use crate::errors::RelayoutError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

/// Log an error with its code; user errors are warnings, the rest errors.
pub fn log_app_error(error: &dyn RelayoutError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error,
            user_error = true
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error,
            user_error = false
        );
    }
}
