mod app_state;
mod cli;
mod env_config;
mod error;
mod logger;
mod pool_api;
mod services;
mod utils;
mod webhook;

#[cfg(test)]
mod test_utils;

use app_state::models::AppState;
use clap::Parser;
use cli::Cli;
use env_config::models::{app_config::AppConfig, app_env::AppEnv, app_setting::AppSettings};
use error::AppError;
use pool_api::pool_api_service::PoolApiService;
use services::report::scheduler::ReportScheduler;
use std::sync::Arc;
use tracing::{debug, error, info};
use webhook::sender::StructWebhookSender;

#[tokio::main]
async fn main() {
    // Missing or malformed arguments exit with clap's usage error (status 2)
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        error!("Fatal: {}", err);
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let settings = Arc::new(initialize_application(&cli)?);
    let app_state = Arc::new(initialize_services(settings.clone())?);
    let scheduler = ReportScheduler::new(app_state);

    if cli.once {
        scheduler.run_once().await?;
        info!("Single report cycle completed");
        return Ok(());
    }

    scheduler.run(None).await?;
    Ok(())
}

/// Loads environment and config, installs logging and resolves run settings
fn initialize_application(cli: &Cli) -> Result<AppSettings, AppError> {
    let environment = AppEnv::new()?;
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::new(&environment.env)?,
    };

    logger::init_logger(&config.log.level, &config.log.format, environment.env)?;

    info!("Starting pool monitor...");
    info!("Current environment: {}", environment.env);

    let settings = AppSettings::resolve(cli, environment, config)?;

    if settings.app_env.is_local() {
        info!("Running in local development mode");
        debug!("Configuration details: {:#?}", settings);
    } else {
        info!("Running in production mode");
    }

    Ok(settings)
}

/// Builds the pool API client and the webhook sender
fn initialize_services(settings: Arc<AppSettings>) -> Result<AppState, AppError> {
    let pool_api_service = match PoolApiService::new(&settings) {
        Ok(service) => Arc::new(service),
        Err(err) => {
            error!("Failed to initialize pool API service: {}", err);
            return Err(err);
        }
    };

    let webhook_sender = Arc::new(StructWebhookSender::new(settings.run.webhook_url.clone()));

    info!("Services initialized successfully");
    Ok(AppState::new(settings, pool_api_service, webhook_sender))
}
