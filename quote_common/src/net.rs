//! Shared networking defaults used by the remote source and the scheduler.
use std::time::Duration;

/// Placeholder endpoint the quotes are pulled from and posted to.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";
/// Category label given to every quote pulled from the endpoint.
pub const SERVER_CATEGORY: &str = "Server";
/// Only the first items of the remote listing are taken.
pub const DEFAULT_FETCH_LIMIT: usize = 5;
/// Seconds between two sync runs.
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 10;
/// Request timeout for both GET and POST.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Settings for talking to the remote endpoint and scheduling sync runs.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Collection URL used for GET and POST.
    pub endpoint: String,
    /// Maximum number of remote items mapped to quotes per fetch.
    pub fetch_limit: usize,
    /// Delay between two scheduled sync runs.
    pub interval: Duration,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            interval: Duration::from_secs(DEFAULT_SYNC_INTERVAL_SECS),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}
