use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: LogConfig,
    pub pool_api: PoolApiConfig,
    pub webhook: WebhookConfig,
    pub chart: ChartConfig,
    pub report: ReportConfig,
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "plain".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PoolApiConfig {
    pub base_url: String,
    /// Web UI root used for the dashboard link in the report
    pub dashboard_url: String,
    /// No timeout when absent
    pub timeout_seconds: Option<u64>,
}

impl Default for PoolApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.ethermine.org".to_string(),
            dashboard_url: "https://ethermine.org".to_string(),
            timeout_seconds: None,
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    pub url: Option<String>,
    /// Embed accent color as a decimal RGB integer
    pub color: u32,
    pub icon_url: String,
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("color", &self.color)
            .field("icon_url", &self.icon_url)
            .finish()
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            color: 2_367_519,
            icon_url: "https://i.imgur.com/KJy2eHQ.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub background_color: String,
    pub foreground_color: String,
    pub current_color: String,
    pub reported_color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 200,
            background_color: "#262327".to_string(),
            foreground_color: "#ffffff".to_string(),
            current_color: "#1f77b4".to_string(),
            reported_color: "#35c335".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub coin_symbol: String,
    pub currency: Currency,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            coin_symbol: "ETH".to_string(),
            currency: Currency::Usd,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub interval_minutes: f64,
    /// Stop the loop on the first failed cycle instead of logging and continuing
    pub fail_fast: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 5.0,
            fail_fast: false,
        }
    }
}

/// Fiat (or BTC) quote used for balance and earnings conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Btc,
    Cny,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Btc => "BTC",
            Currency::Cny => "CNY",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Btc => "₿",
            Currency::Cny => "¥",
        }
    }

    /// BTC quotes are fractions of a coin and need more precision than fiat
    pub fn decimals(&self) -> usize {
        match self {
            Currency::Btc => 6,
            _ => 2,
        }
    }
}
