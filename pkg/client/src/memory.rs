use crate::QuotaSource;
use async_trait::async_trait;
use pkg_types::quota::QuotaStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// One quota object in a status file.
///
/// Example `status.yaml`:
/// ```yaml
/// - namespace: team-a
///   name: compute-resources
///   hard: { cpu: "4", memory: 8Gi }
///   used: { cpu: 3600m, memory: 4Gi }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaStatusEntry {
    pub namespace: String,
    pub name: String,
    #[serde(flatten)]
    pub status: QuotaStatus,
}

/// Fixed, in-memory quota statuses keyed by `(namespace, name)`.
#[derive(Debug, Clone, Default)]
pub struct StaticQuotaSource {
    quotas: HashMap<(String, String), QuotaStatus>,
}

impl StaticQuotaSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, namespace: &str, name: &str, status: QuotaStatus) {
        self.quotas
            .insert((namespace.to_string(), name.to_string()), status);
    }

    pub fn from_entries(entries: impl IntoIterator<Item = QuotaStatusEntry>) -> Self {
        let mut source = Self::new();
        for entry in entries {
            source.insert(&entry.namespace, &entry.name, entry.status);
        }
        source
    }

    /// Load a YAML list of [`QuotaStatusEntry`] from `path`.
    pub fn load_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read status file {}: {}", path, e))?;
        let entries: Vec<QuotaStatusEntry> = serde_yaml::from_str(&content)?;
        info!("Loaded {} quota statuses from {}", entries.len(), path);
        Ok(Self::from_entries(entries))
    }
}

#[async_trait]
impl QuotaSource for StaticQuotaSource {
    async fn fetch(&self, namespace: &str, name: &str) -> anyhow::Result<QuotaStatus> {
        self.quotas
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("ResourceQuota {}/{} not found", namespace, name))
    }
}
