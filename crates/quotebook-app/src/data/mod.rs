//! Data persistence
//!
//! JSON file storage for favorites and settings.

pub mod settings;
pub mod storage;

// Re-export common types
pub use settings::Settings;
pub use storage::{config_dir, FileStore};
