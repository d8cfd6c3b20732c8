use crate::error::AppError;
use crate::pool_api::connection::PoolApiConnection;
use crate::pool_api::models::payouts::PayoutRecord;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
pub trait TraitPayoutsRepository {
    async fn get(&self, address: &str) -> Result<PayoutRecord, AppError>;
}

pub struct StructPayoutsRepository {
    connection: Arc<PoolApiConnection>,
}

impl StructPayoutsRepository {
    pub fn new(connection: Arc<PoolApiConnection>) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl TraitPayoutsRepository for StructPayoutsRepository {
    async fn get(&self, address: &str) -> Result<PayoutRecord, AppError> {
        let record: PayoutRecord = self
            .connection
            .get_json(&format!("/miner/{address}/dashboard/payouts"))
            .await?;

        debug!(
            "Payouts for {}: {} payouts, {} rounds",
            address,
            record.data.payouts.len(),
            record.data.rounds.len()
        );

        Ok(record)
    }
}
