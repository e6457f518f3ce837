//! Quota evaluation constants.

/// Key inside a section's `threshold` map that sets the section-wide default.
pub const SECTION_DEFAULT_KEY: &str = "default";

/// Percentages are computed against this scale.
pub const PERCENT_SCALE: f64 = 100.0;

// ─── Name validation (DNS-1123) ───────────────────────────────────────────

/// Maximum length of a namespace name (DNS-1123 label).
pub const MAX_LABEL_LEN: usize = 63;

/// Maximum length of a quota object name (DNS-1123 subdomain).
pub const MAX_SUBDOMAIN_LEN: usize = 253;
