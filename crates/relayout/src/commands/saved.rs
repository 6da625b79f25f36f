use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use relayout_core::WindowRecord;

use super::helpers::CommandContext;
use crate::table;

/// Saved record with its title inlined for JSON output.
#[derive(Serialize)]
struct SavedWindow<'a> {
    title: &'a str,
    #[serde(flatten)]
    record: &'a WindowRecord,
}

pub(crate) fn handle_saved_command(
    matches: &ArgMatches,
    context: &CommandContext,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.saved_started", json_output = json_output);

    let store = context.load_store();
    let records: Vec<&WindowRecord> = store.records().collect();

    if json_output {
        let saved: Vec<SavedWindow> = records
            .iter()
            .copied()
            .map(|record| SavedWindow {
                title: &record.title,
                record,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&saved)?);
    } else if records.is_empty() {
        println!("No saved layouts in {}", store.path().display());
    } else {
        println!("Saved layouts ({}):", store.path().display());
        table::print_records_table(&records);
    }

    info!(event = "cli.saved_completed", count = records.len());
    Ok(())
}
