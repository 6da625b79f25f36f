use clap::ArgMatches;
use tracing::{error, info};

use relayout_core::events;
use relayout_core::list_unsaved_windows;
use relayout_core::window::{SystemWindowBackend, WindowBackend, WindowInfo};

use super::helpers::CommandContext;
use crate::table;

pub(crate) fn handle_list_command(
    matches: &ArgMatches,
    context: &CommandContext,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let show_all = matches.get_flag("all");

    info!(
        event = "cli.list_started",
        json_output = json_output,
        all = show_all
    );

    let backend = SystemWindowBackend;
    let result: Result<Vec<WindowInfo>, _> = if show_all {
        backend
            .list_windows()
            .map(|windows| windows.into_iter().filter(|w| w.has_title()).collect())
    } else {
        let store = context.load_store();
        list_unsaved_windows(&backend, &store)
    };

    match result {
        Ok(windows) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&windows)?);
            } else if windows.is_empty() {
                println!("No unsaved windows found.");
            } else {
                println!("Open windows:");
                table::print_windows_table(&windows);
            }

            info!(event = "cli.list_completed", count = windows.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to list windows: {}", e);
            error!(event = "cli.list_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
