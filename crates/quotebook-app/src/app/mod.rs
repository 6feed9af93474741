//! Application controller and shared state
//!
//! Frontends send `AppCommand`s; the controller applies them one at a time
//! and publishes an `AppSnapshot`.

pub mod controller;
pub mod state;

pub use controller::AppController;
pub use state::{AppCommand, AppSnapshot};
