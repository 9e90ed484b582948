use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("timeout: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("submission has no id field")]
    MissingId,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("udp forward failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to launch {command}: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
