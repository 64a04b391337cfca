use thiserror::Error;

/// Failure reported by an outbound service adapter
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed response: {0}")]
    Malformed(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;
