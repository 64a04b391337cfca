use crate::domain::errors::ProviderResult;
use crate::domain::ports::GeolocationProvider;
use crate::infrastructure::providers::http::{build_client, decode_json, ensure_success, transport_error};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct IpInfoResponse {
    #[serde(default)]
    country: Option<String>,
}

/// ipinfo.io style geolocation: `GET <url>` returning `{"country": "us", ...}`
pub struct IpInfoGeolocation {
    url: String,
    http_client: Client,
}

impl IpInfoGeolocation {
    pub fn new(url: impl Into<String>, timeout: Duration) -> ProviderResult<Self> {
        Ok(Self {
            url: url.into(),
            http_client: build_client(Some(timeout))?,
        })
    }
}

#[async_trait::async_trait]
impl GeolocationProvider for IpInfoGeolocation {
    async fn lookup_country(&self) -> ProviderResult<Option<String>> {
        let response = self
            .http_client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        let info: IpInfoResponse = decode_json(ensure_success(response).await?).await?;
        Ok(info.country)
    }
}
