use crate::env_config::models::app_setting::AppSettings;
use crate::pool_api::pool_api_service::PoolApiService;
use crate::webhook::sender::TraitWebhookSender;
use std::sync::Arc;

pub struct AppState {
    pub settings: Arc<AppSettings>,
    pub pool_api_service: Arc<PoolApiService>,
    pub webhook_sender: Arc<dyn TraitWebhookSender + Send + Sync>,
}

impl AppState {
    pub fn new(
        settings: Arc<AppSettings>,
        pool_api_service: Arc<PoolApiService>,
        webhook_sender: Arc<dyn TraitWebhookSender + Send + Sync>,
    ) -> Self {
        Self {
            settings,
            pool_api_service,
            webhook_sender,
        }
    }
}
