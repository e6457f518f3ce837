use pkg_constants::output::{LEVEL_INFO, LEVEL_WARNING};
use pkg_constants::quota::SECTION_DEFAULT_KEY;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Hard limits and used amounts of a single quota object, keyed by resource
/// name, with quantities in cluster-native notation (`"4"`, `"3600m"`, `"8Gi"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaStatus {
    #[serde(default)]
    pub hard: BTreeMap<String, String>,
    #[serde(default)]
    pub used: BTreeMap<String, String>,
}

/// A threshold as written in YAML: a number or a numeric string (`"80"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ThresholdValue {
    Number(f64),
    Text(String),
}

impl ThresholdValue {
    pub fn to_f64(&self) -> Result<f64, String> {
        match self {
            ThresholdValue::Number(n) => Ok(*n),
            ThresholdValue::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("threshold '{}' is not a number", s)),
        }
    }
}

/// Deserialize a single threshold, accepting numeric strings.
pub fn deserialize_threshold<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    ThresholdValue::deserialize(deserializer)?
        .to_f64()
        .map_err(serde::de::Error::custom)
}

/// Per-section threshold rules.
///
/// Deserialized from the `threshold` map of a config section. The `default`
/// key is lifted out of the table and becomes the section-wide fallback:
/// ```yaml
/// threshold:
///   cpu: 90
///   default: "75"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, ThresholdValue>",
    into = "BTreeMap<String, f64>"
)]
pub struct ThresholdPolicy {
    resources: BTreeMap<String, f64>,
    default: Option<f64>,
}

impl ThresholdPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit threshold for one resource.
    pub fn with_resource(mut self, resource: impl Into<String>, threshold: f64) -> Self {
        self.resources.insert(resource.into(), threshold);
        self
    }

    /// Set the section-wide default threshold.
    pub fn with_default(mut self, threshold: f64) -> Self {
        self.default = Some(threshold);
        self
    }

    /// Explicit threshold for `resource`, if one is configured.
    pub fn resource(&self, resource: &str) -> Option<f64> {
        self.resources.get(resource).copied()
    }

    pub fn section_default(&self) -> Option<f64> {
        self.default
    }

    /// All configured thresholds, labelled by key (`default` included).
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.resources
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .chain(self.default.map(|d| (SECTION_DEFAULT_KEY, d)))
    }
}

impl From<BTreeMap<String, f64>> for ThresholdPolicy {
    fn from(mut map: BTreeMap<String, f64>) -> Self {
        let default = map.remove(SECTION_DEFAULT_KEY);
        Self {
            resources: map,
            default,
        }
    }
}

impl TryFrom<BTreeMap<String, ThresholdValue>> for ThresholdPolicy {
    type Error = String;

    fn try_from(map: BTreeMap<String, ThresholdValue>) -> Result<Self, Self::Error> {
        let map = map
            .into_iter()
            .map(|(k, v)| v.to_f64().map(|t| (k, t)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(map.into())
    }
}

impl From<ThresholdPolicy> for BTreeMap<String, f64> {
    fn from(policy: ThresholdPolicy) -> Self {
        let mut map = policy.resources;
        if let Some(d) = policy.default {
            map.insert(SECTION_DEFAULT_KEY.to_string(), d);
        }
        map
    }
}

/// Log severity assigned to a utilization reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => LEVEL_INFO,
            Severity::Warning => LEVEL_WARNING,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One classified utilization reading.
///
/// Field order is the wire order of the emitted JSON line; log parsers
/// downstream depend on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageRecord {
    pub level: Severity,
    pub percentage: u64,
    pub resource: String,
    pub quota_object: String,
    pub namespace: String,
}

impl UsageRecord {
    /// Serialize as a single compact JSON line (no trailing newline).
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
