use thiserror::Error;

pub type Result<T> = std::result::Result<T, MonitorError>;

#[derive(Error, Debug)]
pub enum MonitorError {
    /// Missing or invalid credentials/settings. Fatal to the calling
    /// operation, never retried.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network, timeout or unparseable-body failure at the HTTP boundary.
    /// Safe for the caller to retry with backoff; never retried internally.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The upstream API answered with a non-"ok" status. The raw payload is
    /// carried for diagnostics.
    #[error("Upstream API error: {payload}")]
    Api { payload: serde_json::Value },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for MonitorError {
    fn from(e: reqwest::Error) -> Self {
        MonitorError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for MonitorError {
    fn from(e: serde_json::Error) -> Self {
        MonitorError::Transport(format!("unparseable response body: {}", e))
    }
}

impl From<config::ConfigError> for MonitorError {
    fn from(e: config::ConfigError) -> Self {
        MonitorError::Config(e.to_string())
    }
}
