/// Failure evaluating a single resource of a quota object.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuotaError {
    #[error("unrecognized quantity format: {0:?}")]
    UnrecognizedQuantityFormat(String),

    #[error("resource {0} has a hard limit but no used amount")]
    MissingUsageKey(String),

    #[error("hard limit for resource {0} is zero")]
    DivisionByZeroLimit(String),

    #[error("usage of resource {0} is out of range ({1}% of the hard limit)")]
    PercentageOutOfRange(String, f64),
}

/// A [`QuotaError`] together with the quota object it was raised for.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("quota {namespace}/{quota_object}, resource {resource}")]
pub struct EvaluationError {
    pub namespace: String,
    pub quota_object: String,
    pub resource: String,
    pub source: QuotaError,
}
