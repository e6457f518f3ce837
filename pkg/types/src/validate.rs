use anyhow::{Result, bail};
use pkg_constants::quota::{MAX_LABEL_LEN, MAX_SUBDOMAIN_LEN};

/// Validate a namespace name (DNS-1123 label).
/// Rules: lowercase `[a-z0-9-]`, max 63 chars, no leading/trailing hyphens.
pub fn validate_namespace(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("namespace must not be empty");
    }
    if name.len() > MAX_LABEL_LEN {
        bail!(
            "namespace '{}' exceeds {} characters (got {})",
            name,
            MAX_LABEL_LEN,
            name.len()
        );
    }
    validate_label(name, "namespace")
}

/// Validate a quota object name (DNS-1123 subdomain).
/// Rules: dot-separated labels of `[a-z0-9-]`, max 253 chars.
pub fn validate_object_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("quota object name must not be empty");
    }
    if name.len() > MAX_SUBDOMAIN_LEN {
        bail!(
            "quota object name '{}' exceeds {} characters (got {})",
            name,
            MAX_SUBDOMAIN_LEN,
            name.len()
        );
    }
    for label in name.split('.') {
        if label.is_empty() {
            bail!("quota object name '{}' contains an empty segment", name);
        }
        validate_label(label, "quota object name")?;
    }
    Ok(())
}

/// Validate a threshold percentage.
pub fn validate_threshold(key: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        bail!(
            "threshold '{}' must be a non-negative number (got {})",
            key,
            value
        );
    }
    Ok(())
}

fn validate_label(label: &str, what: &str) -> Result<()> {
    if label.starts_with('-') || label.ends_with('-') {
        bail!("{} '{}' must not start or end with a hyphen", what, label);
    }
    if !label
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        bail!(
            "{} '{}' must contain only lowercase letters, digits, and hyphens [a-z0-9-]",
            what,
            label
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_namespaces() {
        assert!(validate_namespace("default").is_ok());
        assert!(validate_namespace("team-a").is_ok());
        assert!(validate_namespace("ns-123").is_ok());
        assert!(validate_namespace("a").is_ok());
    }

    #[test]
    fn invalid_namespaces() {
        assert!(validate_namespace("").is_err());
        assert!(validate_namespace("Team-A").is_err());
        assert!(validate_namespace("team_a").is_err());
        assert!(validate_namespace("-leading").is_err());
        assert!(validate_namespace("trailing-").is_err());
        assert!(validate_namespace("team.a").is_err());
        assert!(validate_namespace(&"a".repeat(64)).is_err());
    }

    #[test]
    fn object_names_allow_dots() {
        assert!(validate_object_name("compute-resources").is_ok());
        assert!(validate_object_name("quota.team-a.v1").is_ok());
        assert!(validate_object_name("quota..v1").is_err());
        assert!(validate_object_name(".quota").is_err());
        assert!(validate_object_name("Quota").is_err());
        assert!(validate_object_name(&"a".repeat(254)).is_err());
    }

    #[test]
    fn thresholds_must_be_non_negative() {
        assert!(validate_threshold("cpu", 0.0).is_ok());
        assert!(validate_threshold("cpu", 80.0).is_ok());
        assert!(validate_threshold("cpu", 150.0).is_ok());
        assert!(validate_threshold("cpu", -1.0).is_err());
        assert!(validate_threshold("cpu", f64::NAN).is_err());
        assert!(validate_threshold("cpu", f64::INFINITY).is_err());
    }
}
