//! Error types for the number window service

use thiserror::Error;

/// Why a provider call produced no numbers.
///
/// Never surfaced to HTTP callers: the orchestrator degrades any of these
/// into an empty contribution for the request.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("provider request timed out")]
    Timeout,
    #[error("provider transport error: {0}")]
    Transport(String),
    #[error("provider returned status {0}")]
    Status(u16),
    #[error("malformed provider payload: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SourceError::Timeout
        } else {
            SourceError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("invalid listen address {0:?}")]
    InvalidAddress(String),
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("listener error: {0}")]
    Io(#[from] std::io::Error),
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
