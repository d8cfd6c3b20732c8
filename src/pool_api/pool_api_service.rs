use crate::env_config::models::app_setting::AppSettings;
use crate::error::AppError;
use crate::pool_api::connection::PoolApiConnection;
use crate::pool_api::repository::{
    dashboard_repository::{StructDashboardRepository, TraitDashboardRepository},
    payouts_repository::{StructPayoutsRepository, TraitPayoutsRepository},
    pool_stats_repository::{StructPoolStatsRepository, TraitPoolStatsRepository},
};
use std::sync::Arc;
use tracing::{error, info};

/// Endpoint repositories sharing one HTTP connection
pub struct PoolApiService {
    pub repository_dashboard: Arc<dyn TraitDashboardRepository + Send + Sync>,
    pub repository_payouts: Arc<dyn TraitPayoutsRepository + Send + Sync>,
    pub repository_pool_stats: Arc<dyn TraitPoolStatsRepository + Send + Sync>,
}

impl PoolApiService {
    pub fn new(settings: &Arc<AppSettings>) -> Result<Self, AppError> {
        info!("Initializing pool API service components");

        let connection = match PoolApiConnection::new(&settings.app_config.pool_api) {
            Ok(conn) => Arc::new(conn),
            Err(e) => {
                error!("Failed to create pool API connection: {}", e);
                return Err(e);
            }
        };

        let repository_dashboard = Arc::new(StructDashboardRepository::new(connection.clone()))
            as Arc<dyn TraitDashboardRepository + Send + Sync>;
        let repository_payouts = Arc::new(StructPayoutsRepository::new(connection.clone()))
            as Arc<dyn TraitPayoutsRepository + Send + Sync>;
        let repository_pool_stats = Arc::new(StructPoolStatsRepository::new(connection))
            as Arc<dyn TraitPoolStatsRepository + Send + Sync>;

        info!("Pool API service initialized successfully");
        Ok(Self {
            repository_dashboard,
            repository_payouts,
            repository_pool_stats,
        })
    }
}
