mod errors;
mod handler;
mod naming;
mod store;
mod types;

pub use errors::LayoutError;
pub use handler::{RemoveSummary, remove_windows};
pub use naming::AppNameResolver;
pub use store::{LayoutStore, backup_path};
pub use types::WindowRecord;
