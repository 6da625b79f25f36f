use std::path::{Path, PathBuf};

use clap::ArgMatches;
use tracing::{error, info};

use relayout_core::events;
use relayout_core::layout::{AppNameResolver, LayoutStore};
use relayout_core::settings::{Settings, layout_file_path, load_settings};

/// Settings and file locations shared by every subcommand.
pub(crate) struct CommandContext {
    pub settings: Settings,
    pub layout_path: PathBuf,
}

impl CommandContext {
    pub fn new(settings: Settings, layout_override: Option<&Path>) -> Self {
        let layout_path = layout_file_path(layout_override, &settings);
        Self {
            settings,
            layout_path,
        }
    }

    pub fn load_store(&self) -> LayoutStore {
        LayoutStore::load(&self.layout_path)
    }

    pub fn resolver(&self) -> AppNameResolver {
        AppNameResolver::with_overrides(&self.settings.apps)
    }
}

pub(crate) fn load_context(
    matches: &ArgMatches,
) -> Result<CommandContext, Box<dyn std::error::Error>> {
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            error!(event = "cli.settings_load_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let layout_override = matches.get_one::<String>("file").map(PathBuf::from);
    let context = CommandContext::new(settings, layout_override.as_deref());

    info!(
        event = "cli.context_loaded",
        layout_path = %context.layout_path.display()
    );
    Ok(context)
}

/// Collect a required multi-value `titles` argument.
pub(crate) fn titles_arg(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("titles")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
