mod errors;
mod system;
mod traits;
mod types;

pub use errors::WindowError;
pub use system::SystemWindowBackend;
pub use traits::WindowBackend;
pub use types::WindowInfo;
