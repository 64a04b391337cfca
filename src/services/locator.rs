use crate::domain::entities::CountryCode;
use crate::domain::errors::ProviderError;
use crate::domain::ports::GeolocationProvider;
use crate::services::resilience::resilient;
use std::sync::Arc;
use tracing::debug;

pub const GEOLOCATION_COMPONENT: &str = "ip_geolocation";

/// Detects the caller's country, falling back to a configured default
#[derive(Clone)]
pub struct Locator {
    geolocation: Arc<dyn GeolocationProvider>,
    fallback: CountryCode,
}

impl Locator {
    pub fn new(geolocation: Arc<dyn GeolocationProvider>, fallback: CountryCode) -> Self {
        Self {
            geolocation,
            fallback,
        }
    }

    /// Never fails: a missing or unrecognized country is reported as an
    /// error and replaced by the fallback.
    pub async fn detect_country(&self) -> CountryCode {
        let lookup = async {
            let raw = self
                .geolocation
                .lookup_country()
                .await?
                .ok_or_else(|| ProviderError::Malformed("missing country field".to_string()))?;

            CountryCode::parse(&raw)
                .ok_or_else(|| ProviderError::Malformed(format!("unrecognized country '{}'", raw)))
        };

        let country = resilient(GEOLOCATION_COMPONENT, lookup, || self.fallback.clone()).await;
        debug!(country = %country, "Detected country");
        country
    }
}
