use async_trait::async_trait;

use crate::domain::errors::ProviderResult;

/// Resolves the caller's country from their public IP address
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    /// Raw country value as reported by the service, `None` if absent.
    async fn lookup_country(&self) -> ProviderResult<Option<String>>;
}
