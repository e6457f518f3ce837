//! Quota sources: where hard limits and used amounts come from.

pub mod cluster;
pub mod memory;

use async_trait::async_trait;
use pkg_types::quota::QuotaStatus;

pub use cluster::KubeQuotaSource;
pub use memory::StaticQuotaSource;

/// Supplies the hard/used mappings of a named quota object.
#[async_trait]
pub trait QuotaSource: Send + Sync {
    async fn fetch(&self, namespace: &str, name: &str) -> anyhow::Result<QuotaStatus>;
}
