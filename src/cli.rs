use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pool-monitor",
    version,
    about = "Posts mining pool stats for a wallet address to a chat webhook"
)]
pub struct Cli {
    /// Wallet address to monitor
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub address: String,

    /// Minutes to wait between reports [default: 5]
    #[arg(long)]
    pub interval: Option<f64>,

    /// Webhook URL (overrides WEBHOOK_URL and the config file)
    #[arg(long)]
    pub webhook: Option<String>,

    /// Config file (default: config/{ENV}.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Send a single report and exit
    #[arg(long)]
    pub once: bool,
}
