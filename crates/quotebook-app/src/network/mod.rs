//! Network operations
//!
//! HTTP client shared by quote sources.

pub mod client;

pub use client::HttpClient;
