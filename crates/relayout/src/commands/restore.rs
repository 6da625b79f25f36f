use std::time::Duration;

use clap::ArgMatches;
use tracing::info;

use relayout_core::launch::SystemAppLauncher;
use relayout_core::window::SystemWindowBackend;
use relayout_core::{RestoreOptions, RestoreSequencer};

use super::helpers::CommandContext;
use crate::table;

/// Per-window failures are reported but never turn into an error exit.
pub(crate) fn handle_restore_command(
    matches: &ArgMatches,
    context: &CommandContext,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    let mut options = RestoreOptions::from(&context.settings.restore);
    if let Some(attempts) = matches.get_one::<u32>("attempts") {
        options = options.with_poll_attempts(*attempts);
    }
    if let Some(interval_ms) = matches.get_one::<u64>("interval-ms") {
        options = options.with_poll_interval(Duration::from_millis(*interval_ms));
    }

    info!(
        event = "cli.restore_started",
        poll_attempts = options.poll_attempts,
        poll_interval_ms = options.poll_interval.as_millis() as u64
    );

    let store = context.load_store();
    let windows = SystemWindowBackend;
    let launcher = SystemAppLauncher;
    let sequencer = RestoreSequencer::new(&windows, &launcher, options);

    let report = sequencer.restore_all(store.records());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if !report.outcomes.is_empty() {
            table::print_restore_table(&report.outcomes);
        }
        println!("{}", report.status_message());
    }

    info!(
        event = "cli.restore_completed",
        positioned = report.positioned_count(),
        failed = report.failed_count()
    );
    Ok(())
}
