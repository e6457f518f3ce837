//! Filesystem path constants.

/// Default config file path for the quota watcher.
pub const DEFAULT_CONFIG: &str = "/etc/quota-watch/config.yaml";
