mod handler;

pub use handler::{
    CaptureOptions, CaptureSummary, capture_windows, list_unsaved_windows, record_from_window,
};
