// File: src/pool_api/connection.rs
use crate::env_config::models::app_config::PoolApiConfig;
use crate::error::AppError;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Shared HTTP client bound to the pool API base URL
#[derive(Clone)]
pub struct PoolApiConnection {
    client: Client,
    base_url: String,
}

impl PoolApiConnection {
    pub fn new(config: &PoolApiConfig) -> Result<Self, AppError> {
        info!("Initializing pool API connection to {}", config.base_url);

        // No timeout unless one is configured explicitly
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_seconds {
            debug!("Pool API request timeout: {}s", timeout);
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issues one GET and decodes the body as `T`.
    ///
    /// The body is only read when the status is exactly 200.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| AppError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(AppError::UnexpectedStatus { status, url });
        }

        let body = resp.bytes().await.map_err(|source| AppError::Transport {
            url: url.clone(),
            source,
        })?;

        debug!("Received {} bytes from {}", body.len(), url);

        serde_json::from_slice(&body).map_err(|source| AppError::Decode { url, source })
    }
}
