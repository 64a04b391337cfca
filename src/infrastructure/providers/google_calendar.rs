use crate::domain::entities::{CalendarEvent, DayWindow};
use crate::domain::errors::{ProviderError, ProviderResult};
use crate::domain::ports::CalendarProvider;
use crate::infrastructure::providers::http::{build_client, decode_json, ensure_success, transport_error};
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, Url};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct EventsListResponse {
    #[serde(default)]
    items: Option<Vec<EventItem>>,
}

#[derive(Debug, Deserialize)]
struct EventItem {
    summary: String,
}

/// Google Calendar v3 `events.list` against public calendars, authenticated
/// with an API key.
pub struct GoogleCalendarProvider {
    base_url: String,
    api_key: String,
    http_client: Client,
}

impl GoogleCalendarProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> ProviderResult<Self> {
        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http_client: build_client(None)?,
        })
    }

    /// `{base}/calendars/{calendar_id}/events` with the id percent-encoded
    /// as a single path segment.
    pub fn events_url(&self, calendar_id: &str) -> ProviderResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProviderError::InvalidRequest(format!("Invalid calendar URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| {
                ProviderError::InvalidRequest(format!("Calendar URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(["calendars", calendar_id, "events"]);

        Ok(url)
    }
}

fn rfc3339(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[async_trait::async_trait]
impl CalendarProvider for GoogleCalendarProvider {
    async fn list_events(
        &self,
        calendar_id: &str,
        window: &DayWindow,
    ) -> ProviderResult<Vec<CalendarEvent>> {
        let url = self.events_url(calendar_id)?;
        let time_min = rfc3339(&window.start);
        let time_max = rfc3339(&window.end);

        let response = self
            .http_client
            .get(url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("timeMin", time_min.as_str()),
                ("timeMax", time_max.as_str()),
                ("singleEvents", "true"),
                ("orderBy", "startTime"),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let events: EventsListResponse = decode_json(ensure_success(response).await?).await?;
        Ok(events
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| CalendarEvent::new(item.summary))
            .collect())
    }
}
