use clap::ArgMatches;
use tracing::error;

use relayout_core::events;

mod helpers;
mod list;
mod remove;
mod restore;
mod save;
mod saved;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let context = helpers::load_context(matches)?;

    let result = match matches.subcommand() {
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches, &context),
        Some(("saved", sub_matches)) => saved::handle_saved_command(sub_matches, &context),
        Some(("save", sub_matches)) => save::handle_save_command(sub_matches, &context),
        Some(("remove", sub_matches)) => remove::handle_remove_command(sub_matches, &context),
        Some(("restore", sub_matches)) => restore::handle_restore_command(sub_matches, &context),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}
