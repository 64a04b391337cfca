use crate::domain::errors::{ProviderError, ProviderResult};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

const MAX_ERROR_BODY: usize = 500;

pub fn build_client(timeout: Option<Duration>) -> ProviderResult<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ProviderError::InvalidRequest(format!("Failed to build HTTP client: {}", e)))
}

/// Classifies a reqwest failure (timeout, connection refused, DNS failure, etc.)
pub fn transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Transport(format!("Request timed out: {}", e))
    } else if e.is_connect() {
        ProviderError::Transport(format!("Connection failed: {}", e))
    } else if e.is_decode() {
        ProviderError::Malformed(e.to_string())
    } else {
        ProviderError::Transport(format!("Network error: {}", e))
    }
}

/// Rejects non-2xx responses, keeping at most 500 characters of the body.
pub async fn ensure_success(response: Response) -> ProviderResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body: String = match response.text().await {
        Ok(body) => body.chars().take(MAX_ERROR_BODY).collect(),
        Err(_) => String::new(),
    };

    Err(ProviderError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Reads the body and decodes it as JSON.
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> ProviderResult<T> {
    let body = response.text().await.map_err(transport_error)?;
    serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))
}
