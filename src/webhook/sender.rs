// File: src/webhook/sender.rs
use crate::error::AppError;
use crate::services::report::chart::RenderedChart;
use crate::webhook::models::WebhookContent;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

pub const IMAGE_FIELD: &str = "image";
pub const IMAGE_FILE_NAME: &str = "image.png";
pub const PAYLOAD_FIELD: &str = "payload_json";

#[async_trait]
pub trait TraitWebhookSender {
    /// Posts the card and chart once. A non-success status is returned, not an error.
    async fn send(
        &self,
        content: &WebhookContent,
        chart: &RenderedChart,
    ) -> Result<StatusCode, AppError>;
}

pub struct StructWebhookSender {
    client: Client,
    url: String,
}

impl StructWebhookSender {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl TraitWebhookSender for StructWebhookSender {
    async fn send(
        &self,
        content: &WebhookContent,
        chart: &RenderedChart,
    ) -> Result<StatusCode, AppError> {
        let payload = serde_json::to_string(content)
            .map_err(|e| AppError::Submission(format!("Failed to encode payload: {e}")))?;

        let image = Part::bytes(chart.as_bytes().to_vec())
            .file_name(IMAGE_FILE_NAME)
            .mime_str("image/png")
            .map_err(|e| AppError::Submission(format!("Invalid image part: {e}")))?;

        let form = Form::new()
            .part(IMAGE_FIELD, image)
            .text(PAYLOAD_FIELD, payload);

        debug!("POST webhook ({} image bytes)", chart.as_bytes().len());

        let resp = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Submission(format!("Webhook request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            warn!("Webhook returned {}: {}", status, snippet);
        }

        Ok(status)
    }
}
