use std::collections::HashSet;

use tracing::{info, warn};

use crate::launch::OpenMethod;
use crate::layout::{AppNameResolver, LayoutError, LayoutStore, WindowRecord};
use crate::window::{WindowBackend, WindowError, WindowInfo};

/// Per-capture flags copied into every new record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureOptions {
    pub position_only: bool,
    pub open_method: OpenMethod,
}

/// Result of a capture run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureSummary {
    pub requested: usize,
    pub saved: usize,
    /// Requested titles with no live window
    pub missing: Vec<String>,
}

impl CaptureSummary {
    pub fn status_message(&self) -> String {
        if self.requested == 0 {
            "Please select one or more windows first.".to_string()
        } else {
            format!("Saved configuration for {} windows", self.saved)
        }
    }
}

/// Live windows with a non-blank title that the layout does not know yet.
///
/// Each title is listed once, in enumeration order.
pub fn list_unsaved_windows(
    backend: &dyn WindowBackend,
    store: &LayoutStore,
) -> Result<Vec<WindowInfo>, WindowError> {
    let mut seen = HashSet::new();
    let windows: Vec<WindowInfo> = backend
        .list_windows()?
        .into_iter()
        .filter(|w| w.has_title() && !store.contains(&w.title))
        .filter(|w| seen.insert(w.title.clone()))
        .collect();

    info!(event = "core.capture.list_unsaved_completed", count = windows.len());
    Ok(windows)
}

/// Build the record that captures `window` as it is right now.
pub fn record_from_window(
    window: &WindowInfo,
    resolver: &AppNameResolver,
    options: CaptureOptions,
) -> WindowRecord {
    let app_name = resolver.resolve(&window.title);
    info!(
        event = "core.capture.app_name_resolved",
        title = %window.title,
        app_name = %app_name
    );

    WindowRecord {
        title: window.title.clone(),
        x: window.x,
        y: window.y,
        width: window.width,
        height: window.height,
        app_name,
        original_title: window.title.clone(),
        position_only: options.position_only,
        open_method: options.open_method.to_string(),
    }
}

/// Snapshot the windows with the given titles into the layout and save it.
///
/// Titles without a live window are logged and skipped. Nothing is written
/// when `titles` is empty.
pub fn capture_windows(
    backend: &dyn WindowBackend,
    store: &mut LayoutStore,
    resolver: &AppNameResolver,
    titles: &[String],
    options: CaptureOptions,
) -> Result<CaptureSummary, LayoutError> {
    let mut summary = CaptureSummary {
        requested: titles.len(),
        ..Default::default()
    };

    if titles.is_empty() {
        return Ok(summary);
    }

    info!(event = "core.capture.started", requested = titles.len());

    for title in titles {
        let window = match backend.find_windows_with_title(title) {
            Ok(windows) => windows.into_iter().next(),
            Err(e) => {
                warn!(
                    event = "core.capture.lookup_failed",
                    title = %title,
                    error = %e
                );
                None
            }
        };

        let Some(window) = window else {
            warn!(event = "core.capture.window_not_found", title = %title);
            summary.missing.push(title.clone());
            continue;
        };

        let record = record_from_window(&window, resolver, options);
        info!(
            event = "core.capture.window_captured",
            title = %record.title,
            x = record.x,
            y = record.y,
            width = record.width,
            height = record.height
        );
        store.upsert(record);
        summary.saved += 1;
    }

    store.save()?;

    info!(
        event = "core.capture.completed",
        saved = summary.saved,
        missing = summary.missing.len()
    );
    Ok(summary)
}
