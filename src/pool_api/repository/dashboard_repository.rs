use crate::error::AppError;
use crate::pool_api::connection::PoolApiConnection;
use crate::pool_api::models::dashboard::DashboardRecord;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
pub trait TraitDashboardRepository {
    async fn get(&self, address: &str) -> Result<DashboardRecord, AppError>;
}

pub struct StructDashboardRepository {
    connection: Arc<PoolApiConnection>,
}

impl StructDashboardRepository {
    pub fn new(connection: Arc<PoolApiConnection>) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl TraitDashboardRepository for StructDashboardRepository {
    async fn get(&self, address: &str) -> Result<DashboardRecord, AppError> {
        let record: DashboardRecord = self
            .connection
            .get_json(&format!("/miner/{address}/dashboard"))
            .await?;

        debug!(
            "Dashboard for {}: {} samples, {} workers",
            address,
            record.data.statistics.len(),
            record.data.workers.len()
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ADDRESS, fixture_router, pool_api_config, spawn_server};

    #[tokio::test]
    async fn test_get_dashboard_from_fixture() {
        let base_url = spawn_server(fixture_router()).await;
        let connection = Arc::new(PoolApiConnection::new(&pool_api_config(&base_url)).unwrap());
        let repository = StructDashboardRepository::new(connection);

        let record = repository.get(ADDRESS).await.unwrap();

        assert_eq!(record.status, "OK");
        assert_eq!(record.data.statistics.len(), 3);
        assert_eq!(record.data.workers.len(), 2);
        assert_eq!(record.data.current_statistics.active_workers, 2);
        assert_eq!(record.data.settings.min_payout, 5e18);
    }

    #[tokio::test]
    async fn test_unknown_address_fails_with_status() {
        let base_url = spawn_server(fixture_router()).await;
        let connection = Arc::new(PoolApiConnection::new(&pool_api_config(&base_url)).unwrap());
        let repository = StructDashboardRepository::new(connection);

        let err = repository.get("0xunknown").await.unwrap_err();
        assert!(matches!(err, AppError::UnexpectedStatus { .. }));
    }
}
