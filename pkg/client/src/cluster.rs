use crate::QuotaSource;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::ResourceQuota;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use kube::{Api, Client};
use pkg_types::quota::QuotaStatus;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Reads `ResourceQuota` status from the Kubernetes API.
#[derive(Clone)]
pub struct KubeQuotaSource {
    client: Client,
}

impl KubeQuotaSource {
    /// Build a client from the environment: the in-cluster service account
    /// when running in a pod, the local kubeconfig otherwise.
    pub async fn from_env() -> anyhow::Result<Self> {
        let client = Client::try_default()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create Kubernetes client: {}", e))?;
        info!(
            "Connected to Kubernetes API (default namespace: {})",
            client.default_namespace()
        );
        Ok(Self { client })
    }

    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuotaSource for KubeQuotaSource {
    async fn fetch(&self, namespace: &str, name: &str) -> anyhow::Result<QuotaStatus> {
        let api: Api<ResourceQuota> = Api::namespaced(self.client.clone(), namespace);
        let quota = api
            .get(name)
            .await
            .map_err(|e| {
                anyhow::anyhow!("Failed to get ResourceQuota {}/{}: {}", namespace, name, e)
            })?;

        let status = quota.status.unwrap_or_default();
        let status = QuotaStatus {
            hard: flatten(status.hard),
            used: flatten(status.used),
        };
        debug!(
            "ResourceQuota {}/{}: {} hard, {} used",
            namespace,
            name,
            status.hard.len(),
            status.used.len()
        );
        Ok(status)
    }
}

fn flatten(quantities: Option<BTreeMap<String, Quantity>>) -> BTreeMap<String, String> {
    quantities
        .unwrap_or_default()
        .into_iter()
        .map(|(resource, q)| (resource, q.0))
        .collect()
}
