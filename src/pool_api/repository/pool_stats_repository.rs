use crate::error::AppError;
use crate::pool_api::connection::PoolApiConnection;
use crate::pool_api::models::pool_stats::PoolStatsRecord;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
pub trait TraitPoolStatsRepository {
    async fn get(&self) -> Result<PoolStatsRecord, AppError>;
}

pub struct StructPoolStatsRepository {
    connection: Arc<PoolApiConnection>,
}

impl StructPoolStatsRepository {
    pub fn new(connection: Arc<PoolApiConnection>) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl TraitPoolStatsRepository for StructPoolStatsRepository {
    async fn get(&self) -> Result<PoolStatsRecord, AppError> {
        let record: PoolStatsRecord = self.connection.get_json("/poolStats").await?;

        debug!(
            "Pool stats: {} miners, price {} USD",
            record.data.pool_stats.miners, record.data.price.usd
        );

        Ok(record)
    }
}
