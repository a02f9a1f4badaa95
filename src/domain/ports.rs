use crate::domain::model::{RegulationQuery, RegulationReport};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Key/value persistence with browser local-storage semantics.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Boundary to the external text-generation service.
///
/// Implementations must collapse every failure (transport, status, malformed
/// payload) into [`GlobalDriveError::FetchFailed`](crate::utils::error::GlobalDriveError::FetchFailed).
#[async_trait]
pub trait RegulationService: Send + Sync {
    async fn fetch_regulations(&self, query: &RegulationQuery) -> Result<RegulationReport>;
}
