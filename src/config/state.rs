// Application state module
// Runtime state shared across all connections

use std::sync::atomic::AtomicBool;

use super::types::Config;

/// Application state
///
/// The service has no per-request mutable state; everything here is
/// read-only after startup except the lock-free cached flags.
pub struct AppState {
    pub config: Config,

    // Cached config values for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let cached_access_log = AtomicBool::new(config.logging.access_log);

        Self {
            config: config.clone(),
            cached_access_log,
        }
    }
}
