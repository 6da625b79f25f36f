use clap::ArgMatches;
use tracing::{error, info};

use relayout_core::events;
use relayout_core::launch::OpenMethod;
use relayout_core::window::SystemWindowBackend;
use relayout_core::{CaptureOptions, capture_windows};

use super::helpers::{CommandContext, titles_arg};

pub(crate) fn handle_save_command(
    matches: &ArgMatches,
    context: &CommandContext,
) -> Result<(), Box<dyn std::error::Error>> {
    let titles = titles_arg(matches);
    let position_only = matches.get_flag("position-only");
    let open_method: OpenMethod = matches
        .get_one::<String>("open-method")
        .map(|s| s.parse::<OpenMethod>())
        .transpose()?
        .unwrap_or_default();

    info!(
        event = "cli.save_started",
        count = titles.len(),
        position_only = position_only,
        open_method = %open_method
    );

    let mut store = context.load_store();
    let options = CaptureOptions {
        position_only,
        open_method,
    };

    match capture_windows(
        &SystemWindowBackend,
        &mut store,
        &context.resolver(),
        &titles,
        options,
    ) {
        Ok(summary) => {
            for title in &summary.missing {
                eprintln!("Could not find window: {}", title);
            }
            println!("{}", summary.status_message());

            info!(
                event = "cli.save_completed",
                saved = summary.saved,
                missing = summary.missing.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to save layout: {}", e);
            error!(event = "cli.save_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
