use super::{app_config::AppConfig, app_env::AppEnv};
use crate::cli::Cli;
use crate::env_config::load_config::validate_interval;
use crate::error::AppError;
use std::fmt;
use std::time::Duration;

#[derive(Debug)]
pub struct AppSettings {
    pub app_config: AppConfig,
    pub app_env: AppEnv,
    pub run: RunSettings,
}

/// Values resolved from CLI flags, environment and config file
#[derive(Clone)]
pub struct RunSettings {
    pub address: String,
    pub webhook_url: String,
    pub interval: Duration,
}

// The webhook URL embeds its token
impl fmt::Debug for RunSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunSettings")
            .field("address", &self.address)
            .field("webhook_url", &"<redacted>")
            .field("interval", &self.interval)
            .finish()
    }
}

impl AppSettings {
    /// Resolves run values with precedence CLI flag > environment > config file.
    pub fn resolve(cli: &Cli, app_env: AppEnv, app_config: AppConfig) -> Result<Self, AppError> {
        let interval_minutes = cli
            .interval
            .unwrap_or(app_config.scheduler.interval_minutes);
        validate_interval(interval_minutes)?;

        let webhook_url = cli
            .webhook
            .clone()
            .or_else(|| app_env.webhook_url.clone())
            .or_else(|| app_config.webhook.url.clone())
            .ok_or_else(|| {
                AppError::Config(
                    "No webhook URL: pass --webhook, set WEBHOOK_URL or webhook.url".to_string(),
                )
            })?;

        let run = RunSettings {
            address: cli.address.clone(),
            webhook_url,
            interval: Duration::from_secs_f64(interval_minutes * 60.0),
        };

        Ok(Self {
            app_config,
            app_env,
            run,
        })
    }
}
