use clap::ArgMatches;
use tracing::{error, info};

use relayout_core::events;
use relayout_core::layout::remove_windows;

use super::helpers::{CommandContext, titles_arg};

pub(crate) fn handle_remove_command(
    matches: &ArgMatches,
    context: &CommandContext,
) -> Result<(), Box<dyn std::error::Error>> {
    let titles = titles_arg(matches);
    info!(event = "cli.remove_started", count = titles.len());

    let mut store = context.load_store();

    match remove_windows(&mut store, &titles) {
        Ok(summary) => {
            println!("{}", summary.status_message());
            info!(
                event = "cli.remove_completed",
                requested = summary.requested,
                removed = summary.removed
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to remove layouts: {}", e);
            error!(event = "cli.remove_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
