use tracing::{info, warn};

use super::errors::LayoutError;
use super::store::LayoutStore;

/// Result of removing saved windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveSummary {
    pub requested: usize,
    pub removed: usize,
}

impl RemoveSummary {
    pub fn status_message(&self) -> String {
        if self.requested == 0 {
            "Please select configurations to remove.".to_string()
        } else {
            format!("Removed {} configurations", self.requested)
        }
    }
}

/// Remove the given titles from the layout and save it.
///
/// Unknown titles are ignored. Nothing is written when `titles` is empty.
pub fn remove_windows(
    store: &mut LayoutStore,
    titles: &[String],
) -> Result<RemoveSummary, LayoutError> {
    if titles.is_empty() {
        return Ok(RemoveSummary {
            requested: 0,
            removed: 0,
        });
    }

    info!(event = "core.layout.remove_started", requested = titles.len());

    let mut removed = 0;
    for title in titles {
        if store.remove(title).is_some() {
            removed += 1;
        } else {
            warn!(event = "core.layout.remove_unknown_title", title = %title);
        }
    }

    store.save()?;

    info!(
        event = "core.layout.remove_completed",
        requested = titles.len(),
        removed = removed
    );
    Ok(RemoveSummary {
        requested: titles.len(),
        removed,
    })
}
