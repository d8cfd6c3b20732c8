// File: src/services/report/assembler.rs
use super::calculator::{Projection, ReportMetrics};
use crate::env_config::models::app_config::{AppConfig, Currency};
use crate::webhook::models::{Author, Embed, EmbedField, EmbedImage, WebhookContent};
use crate::webhook::sender::IMAGE_FILE_NAME;

/// Divider row between field groups
pub const SEPARATOR: &str = "————————————————————";

/// Turns computed metrics into the webhook card
pub struct ReportAssembler {
    dashboard_url: String,
    icon_url: String,
    color: u32,
    coin: String,
    currency: Currency,
}

impl ReportAssembler {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            dashboard_url: config.pool_api.dashboard_url.trim_end_matches('/').to_string(),
            icon_url: config.webhook.icon_url.clone(),
            color: config.webhook.color,
            coin: config.report.coin_symbol.clone(),
            currency: config.report.currency,
        }
    }

    pub fn assemble(&self, address: &str, metrics: &ReportMetrics) -> WebhookContent {
        WebhookContent {
            content: None,
            embeds: vec![Embed {
                color: self.color,
                fields: self.fields(metrics),
                author: Author {
                    name: address.to_string(),
                    url: format!("{}/miners/{}/dashboard", self.dashboard_url, address),
                    icon_url: self.icon_url.clone(),
                },
                image: EmbedImage {
                    url: format!("attachment://{IMAGE_FILE_NAME}"),
                },
            }],
            attachments: Vec::new(),
        }
    }

    pub fn fields(&self, metrics: &ReportMetrics) -> Vec<EmbedField> {
        vec![
            EmbedField::inline(
                "Workers active",
                format!("`{} / {}`", metrics.active_workers, metrics.worker_count),
            ),
            EmbedField::inline(
                "Unpaid Balance",
                format!(
                    "`{} {}` | `{}`",
                    coins(metrics.unpaid),
                    self.coin,
                    self.fiat(metrics.unpaid_fiat)
                ),
            ),
            EmbedField::new(
                "Estimated Earnings",
                [
                    (metrics.daily, "day"),
                    (metrics.weekly, "week"),
                    (metrics.monthly, "month"),
                ]
                .iter()
                .map(|(projection, period)| self.projection_line(projection, period))
                .collect::<Vec<_>>()
                .join("\n"),
            ),
            EmbedField::new(
                SEPARATOR,
                format!(
                    "**Payouts**\n\nLast Payout: `{}`\nDaily Earnings `≈ {} {}`\nRemaining to Threshold: `{} {}`",
                    last_payout(metrics.days_since_last_payout),
                    coins(metrics.daily.coins),
                    self.coin,
                    coins(metrics.remaining_to_threshold),
                    self.coin
                ),
            ),
            EmbedField::new(SEPARATOR, "**Hashrate**"),
            EmbedField::inline("Current", hashrate(Some(metrics.current_hashrate))),
            EmbedField::inline("Average", hashrate(metrics.average_hashrate)),
            EmbedField::inline("Reported", hashrate(Some(metrics.reported_hashrate))),
        ]
    }

    fn projection_line(&self, projection: &Projection, period: &str) -> String {
        format!(
            "`{} {}` (`{}`) / {}",
            coins(projection.coins),
            self.coin,
            self.fiat(projection.fiat),
            period
        )
    }

    fn fiat(&self, value: f64) -> String {
        format!(
            "{}{:.*} {}",
            self.currency.symbol(),
            self.currency.decimals(),
            value,
            self.currency.code()
        )
    }
}

fn coins(value: f64) -> String {
    format!("{value:.6}")
}

fn hashrate(value: Option<f64>) -> String {
    match value {
        Some(mhs) => format!("`{mhs:.1} MH/s`"),
        None => "`n/a`".to_string(),
    }
}

fn last_payout(days: Option<i64>) -> String {
    match days {
        Some(days) => format!("{days} days ago"),
        None => "never".to_string(),
    }
}
