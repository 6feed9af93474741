//! Quotebook App Services
//!
//! Quote source, file-backed persistence, settings, HTTP client and the
//! event-driven application controller. Depends on the `quotebook` engine crate.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod network;
pub mod providers;
