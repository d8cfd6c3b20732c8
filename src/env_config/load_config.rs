use super::models::app_config::AppConfig;
use super::models::app_env::Env;
use crate::error::AppError;
use crate::services::report::chart::parse_hex_color;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

impl AppConfig {
    /// Loads `config/{env}.toml`, falling back to defaults when the file is absent.
    pub fn new(env: &Env) -> Result<AppConfig, AppError> {
        let path = PathBuf::from(format!("config/{env}.toml"));
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            let config = AppConfig::default();
            config.validate()?;
            return Ok(config);
        }
        Self::from_file(&path)
    }

    /// Loads an explicit config file; a missing file is an error.
    pub fn from_file(path: &Path) -> Result<AppConfig, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<AppConfig, AppError> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_interval(self.scheduler.interval_minutes)?;

        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(AppError::Config(format!(
                "Chart size must be positive, got {}x{}",
                self.chart.width, self.chart.height
            )));
        }

        for color in [
            &self.chart.background_color,
            &self.chart.foreground_color,
            &self.chart.current_color,
            &self.chart.reported_color,
        ] {
            parse_hex_color(color)?;
        }

        if self.webhook.color > 0xFF_FF_FF {
            return Err(AppError::Config(format!(
                "Webhook color {} is not a 24-bit RGB value",
                self.webhook.color
            )));
        }

        Ok(())
    }
}

/// Interval in minutes must be a positive finite number.
pub fn validate_interval(minutes: f64) -> Result<(), AppError> {
    if minutes.is_finite() && minutes > 0.0 {
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "Interval must be a positive number of minutes, got {minutes}"
        )))
    }
}
