use async_trait::async_trait;

use crate::domain::entities::CompletionRequest;
use crate::domain::errors::ProviderResult;

/// Chat-style text generation
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the raw content of the first generated message.
    async fn complete(&self, request: &CompletionRequest) -> ProviderResult<String>;
}
