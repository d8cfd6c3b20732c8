use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: StatusCode, url: String },
    #[error("Decode error for {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Render error: {0}")]
    Render(String),
    #[error("Submission error: {0}")]
    Submission(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Short machine-friendly name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Transport { .. } => "transport",
            AppError::UnexpectedStatus { .. } => "unexpected_status",
            AppError::Decode { .. } => "decode",
            AppError::Render(_) => "render",
            AppError::Submission(_) => "submission",
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
        }
    }
}
