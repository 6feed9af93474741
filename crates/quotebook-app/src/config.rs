//! Configuration constants for quotebook app services

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "quotebook";
}

/// Quote source configuration
pub mod providers {
    /// Published quote list
    pub const DEFAULT_QUOTES_URL: &str = "https://gist.githubusercontent.com/skillcrush-curriculum/6365d193df80174943f6664c7c6dbadf/raw/1f1e06df2f4fc3c2ef4c30a3a4010149f270c0e0/quotes.js";
}

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Quotebook/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// Controller-related configuration
pub mod controller {
    /// Capacity of the command channel
    pub const COMMAND_QUEUE: usize = 64;

    /// How long the shell waits for the controller to publish a new snapshot
    pub const UPDATE_WAIT_MS: u64 = 2_000;
}
