//! Core library for relayout.
//!
//! Snapshots the geometry of open windows into a JSON layout file and
//! restores it later, launching applications whose windows are missing.

pub mod capture;
pub mod errors;
pub mod events;
pub mod launch;
pub mod layout;
pub mod logging;
pub mod restore;
pub mod settings;
pub mod window;

pub use capture::{CaptureOptions, CaptureSummary, capture_windows, list_unsaved_windows};
pub use layout::{LayoutStore, WindowRecord};
pub use logging::init_logging;
pub use restore::{RestoreOptions, RestoreReport, RestoreSequencer};
pub use settings::Settings;
