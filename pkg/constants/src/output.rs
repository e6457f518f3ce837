//! Output and logging constants.

/// Severity label for readings below their threshold.
pub const LEVEL_INFO: &str = "INFO";

/// Severity label for readings at or above their threshold.
pub const LEVEL_WARNING: &str = "WARNING";

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";
