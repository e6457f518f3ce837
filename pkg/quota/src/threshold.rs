use pkg_types::quota::{Severity, ThresholdPolicy};

/// Pick the threshold that applies to `resource`.
///
/// Precedence, first match wins:
/// 1. an explicit entry for `resource` in the section policy;
/// 2. the policy's `default` entry;
/// 3. `global_default`, only when the section has no policy at all.
///
/// A policy carrying neither the resource nor `default` yields `None`: the
/// reading is never escalated and the global default is not consulted.
pub fn resolve_threshold(
    policy: Option<&ThresholdPolicy>,
    resource: &str,
    global_default: f64,
) -> Option<f64> {
    match policy {
        Some(policy) => policy
            .resource(resource)
            .or_else(|| policy.section_default()),
        None => Some(global_default),
    }
}

/// WARNING when `percentage` reaches the threshold, INFO otherwise or when
/// no threshold applies.
pub fn classify(percentage: u64, threshold: Option<f64>) -> Severity {
    match threshold {
        Some(t) if percentage as f64 >= t => Severity::Warning,
        _ => Severity::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn severity(
        policy: Option<&ThresholdPolicy>,
        resource: &str,
        pct: u64,
        global: f64,
    ) -> Severity {
        classify(pct, resolve_threshold(policy, resource, global))
    }

    #[test]
    fn explicit_resource_threshold_wins() {
        let policy = ThresholdPolicy::new().with_resource("cpu", 80.0).with_default(95.0);
        assert_eq!(severity(Some(&policy), "cpu", 85, 50.0), Severity::Warning);
        assert_eq!(severity(Some(&policy), "cpu", 79, 50.0), Severity::Info);
        assert_eq!(severity(Some(&policy), "cpu", 80, 50.0), Severity::Warning);
    }

    #[test]
    fn policy_without_entry_or_default_never_uses_global() {
        let policy = ThresholdPolicy::new().with_resource("cpu", 80.0);
        assert_eq!(resolve_threshold(Some(&policy), "memory", 50.0), None);
        assert_eq!(severity(Some(&policy), "cpu", 85, 50.0), Severity::Warning);
        assert_eq!(severity(Some(&policy), "memory", 60, 50.0), Severity::Info);
        assert_eq!(severity(Some(&policy), "memory", 100, 50.0), Severity::Info);
    }

    #[test]
    fn section_default_applies_to_unlisted_resources() {
        let policy = ThresholdPolicy::new().with_default(70.0);
        assert_eq!(severity(Some(&policy), "pods", 75, 10.0), Severity::Warning);
        assert_eq!(severity(Some(&policy), "pods", 65, 10.0), Severity::Info);
    }

    #[test]
    fn global_default_applies_without_policy() {
        assert_eq!(severity(None, "cpu", 95, 90.0), Severity::Warning);
        assert_eq!(severity(None, "cpu", 90, 90.0), Severity::Warning);
        assert_eq!(severity(None, "cpu", 89, 90.0), Severity::Info);
    }

    #[test]
    fn fractional_thresholds() {
        assert_eq!(classify(80, Some(80.5)), Severity::Info);
        assert_eq!(classify(81, Some(80.5)), Severity::Warning);
    }
}
