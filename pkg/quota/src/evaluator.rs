use crate::error::{EvaluationError, QuotaError};
use crate::quantity::normalize;
use crate::threshold::{classify, resolve_threshold};
use pkg_constants::quota::PERCENT_SCALE;
use pkg_types::quota::{ThresholdPolicy, UsageRecord};
use std::collections::BTreeMap;
use tracing::debug;

/// Compute one classified record per resource in `hard`, in key order.
///
/// The first failing resource aborts the whole quota object; no partial
/// result is returned.
pub fn evaluate(
    namespace: &str,
    quota_object: &str,
    hard: &BTreeMap<String, String>,
    used: &BTreeMap<String, String>,
    policy: Option<&ThresholdPolicy>,
    global_default: f64,
) -> Result<Vec<UsageRecord>, EvaluationError> {
    hard.iter()
        .map(|(resource, limit)| -> Result<UsageRecord, EvaluationError> {
            let percentage = utilization(resource, limit, used).map_err(|source| EvaluationError {
                namespace: namespace.to_string(),
                quota_object: quota_object.to_string(),
                resource: resource.clone(),
                source,
            })?;
            let threshold = resolve_threshold(policy, resource, global_default);
            let level = classify(percentage, threshold);
            debug!(
                "{}/{} {}: {}% (threshold {:?}) -> {}",
                namespace, quota_object, resource, percentage, threshold, level
            );
            Ok(UsageRecord {
                level,
                percentage,
                resource: resource.clone(),
                quota_object: quota_object.to_string(),
                namespace: namespace.to_string(),
            })
        })
        .collect()
}

/// Used amount of `resource` as a whole percentage of `limit`, rounded half
/// to even.
fn utilization(
    resource: &str,
    limit: &str,
    used: &BTreeMap<String, String>,
) -> Result<u64, QuotaError> {
    let base = normalize(limit)?;
    let amount = used
        .get(resource)
        .ok_or_else(|| QuotaError::MissingUsageKey(resource.to_string()))?;
    let amount = normalize(amount)?;
    if base == 0.0 {
        return Err(QuotaError::DivisionByZeroLimit(resource.to_string()));
    }
    let percentage = (amount / base * PERCENT_SCALE).round_ties_even();
    if !percentage.is_finite() || percentage >= u64::MAX as f64 {
        return Err(QuotaError::PercentageOutOfRange(
            resource.to_string(),
            percentage,
        ));
    }
    Ok(percentage as u64)
}
