use crate::quota::{ThresholdPolicy, deserialize_threshold};
use crate::validate::{validate_namespace, validate_object_name, validate_threshold};
use serde::{Deserialize, Serialize};

/// Quota watcher configuration file (YAML).
///
/// Example `config.yaml`:
/// ```yaml
/// defaultThreshold: 80
/// quotas:
///   - namespace: team-a
///     resourceQuotas: compute-resources
///     threshold:
///       cpu: 90
///       default: 75
///   - namespace: team-b
///     resourceQuotas: object-counts
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaWatchConfig {
    /// Threshold applied to sections that carry no `threshold` map at all.
    #[serde(deserialize_with = "deserialize_threshold")]
    pub default_threshold: f64,
    #[serde(default)]
    pub quotas: Vec<QuotaSection>,
}

/// One watched quota object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotaSection {
    pub namespace: String,
    /// Name of the `ResourceQuota` object inside `namespace`.
    #[serde(rename = "resourceQuotas")]
    pub resource_quota: String,
    #[serde(default)]
    pub threshold: Option<ThresholdPolicy>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration file {path} is not accessible")]
    Access {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration is not valid YAML")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl QuotaWatchConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check names and thresholds of every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_threshold("defaultThreshold", self.default_threshold)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        for (i, section) in self.quotas.iter().enumerate() {
            let invalid =
                |e: anyhow::Error| ConfigError::Invalid(format!("quotas[{}]: {}", i, e));
            validate_namespace(&section.namespace).map_err(invalid)?;
            validate_object_name(&section.resource_quota).map_err(invalid)?;
            if let Some(policy) = &section.threshold {
                for (key, value) in policy.entries() {
                    validate_threshold(key, value).map_err(invalid)?;
                }
            }
        }
        Ok(())
    }
}

/// Load and validate the YAML config file at `path`.
pub fn load_config_file(path: &str) -> Result<QuotaWatchConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Access {
        path: path.to_string(),
        source,
    })?;
    QuotaWatchConfig::from_yaml(&content)
}
