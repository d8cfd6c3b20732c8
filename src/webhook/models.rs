// File: src/webhook/models.rs
use serde::Serialize;
use serde_json::Value;

/// Top-level `payload_json` document of a webhook message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookContent {
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
    pub attachments: Vec<Value>,
}

/// One card of the message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub author: Author,
    pub image: EmbedImage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: None,
        }
    }

    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            inline: Some(true),
            ..Self::new(name, value)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub name: String,
    pub url: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedImage {
    pub url: String,
}
