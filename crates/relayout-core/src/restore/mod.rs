mod handler;
mod types;

pub use handler::RestoreSequencer;
pub use types::{RestoreOptions, RestoreOutcome, RestoreReport, RestoreStatus, WindowSource};
