use crate::config::Config;
use crate::domain::entities::CalendarDirectory;
use crate::domain::errors::ProviderResult;
use crate::domain::ports::{CalendarProvider, Clock, CompletionProvider, GeolocationProvider};
use crate::infrastructure::providers::{
    GoogleCalendarProvider, GroqCompletionProvider, IpInfoGeolocation,
};
use crate::infrastructure::runtime::{SystemClock, ZonedClock};
use crate::services::{GreetingComposer, HolidayService, Locator, LoginMessageService};
use std::sync::Arc;

/// Picks the clock for the configured timezone, or the system offset.
pub fn build_clock(config: &Config) -> Arc<dyn Clock> {
    match config.timezone {
        Some(tz) => Arc::new(ZonedClock::new(tz)),
        None => Arc::new(SystemClock::new()),
    }
}

/// Wires the HTTP adapters from `config` into the greeting pipeline.
pub fn build_login_message_service(config: &Config) -> ProviderResult<LoginMessageService> {
    let geolocation = Arc::new(IpInfoGeolocation::new(
        config.geolocation_url.clone(),
        config.geolocation_timeout,
    )?) as Arc<dyn GeolocationProvider>;

    let calendar = Arc::new(GoogleCalendarProvider::new(
        config.calendar_api_url.clone(),
        config.gcp_api_key.clone(),
    )?) as Arc<dyn CalendarProvider>;

    let completion = Arc::new(GroqCompletionProvider::new(
        config.llm_api_url.clone(),
        config.groq_api_key.clone(),
        config.llm_model.clone(),
    )?) as Arc<dyn CompletionProvider>;

    tracing::debug!(
        model = %config.llm_model,
        fallback_country = %config.fallback_country,
        "Greeting pipeline configured"
    );

    Ok(LoginMessageService::new(
        Locator::new(geolocation, config.fallback_country.clone()),
        HolidayService::new(calendar, CalendarDirectory::default()),
        GreetingComposer::new(completion),
        build_clock(config),
    ))
}
