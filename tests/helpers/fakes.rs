use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone};
use std::sync::Mutex;
use xlya_greeter::domain::entities::{CalendarEvent, CompletionRequest, DayWindow, LocalMoment};
use xlya_greeter::domain::errors::{ProviderError, ProviderResult};
use xlya_greeter::domain::ports::{CalendarProvider, Clock, CompletionProvider, GeolocationProvider};

/// Builds a moment at the given local wall time and UTC offset (in hours).
pub fn local_moment(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    offset_hours: i32,
) -> LocalMoment {
    let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
    let at: DateTime<FixedOffset> = offset
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap();
    LocalMoment::new(at)
}

pub struct FixedClock(pub LocalMoment);

impl Clock for FixedClock {
    fn now_local(&self) -> LocalMoment {
        self.0
    }
}

pub enum GeolocationScript {
    Country(Option<String>),
    Fail(&'static str),
}

pub struct FakeGeolocation {
    script: GeolocationScript,
}

impl FakeGeolocation {
    pub fn country(country: &str) -> Self {
        Self {
            script: GeolocationScript::Country(Some(country.to_string())),
        }
    }

    pub fn missing_country() -> Self {
        Self {
            script: GeolocationScript::Country(None),
        }
    }

    pub fn failing(message: &'static str) -> Self {
        Self {
            script: GeolocationScript::Fail(message),
        }
    }
}

#[async_trait]
impl GeolocationProvider for FakeGeolocation {
    async fn lookup_country(&self) -> ProviderResult<Option<String>> {
        match &self.script {
            GeolocationScript::Country(country) => Ok(country.clone()),
            GeolocationScript::Fail(message) => Err(ProviderError::Transport(message.to_string())),
        }
    }
}

/// Calendar fake that records every (calendar_id, window) it is asked for.
pub struct FakeCalendar {
    events: Option<Vec<String>>,
    pub calls: Mutex<Vec<(String, DayWindow)>>,
}

impl FakeCalendar {
    pub fn with_events(names: &[&str]) -> Self {
        Self {
            events: Some(names.iter().map(|name| name.to_string()).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            events: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, DayWindow)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CalendarProvider for FakeCalendar {
    async fn list_events(
        &self,
        calendar_id: &str,
        window: &DayWindow,
    ) -> ProviderResult<Vec<CalendarEvent>> {
        self.calls
            .lock()
            .unwrap()
            .push((calendar_id.to_string(), *window));

        match &self.events {
            Some(names) => Ok(names.iter().map(CalendarEvent::new).collect()),
            None => Err(ProviderError::Transport("Connection failed: simulated".to_string())),
        }
    }
}

/// Completion fake that records requests and replays a canned answer.
pub struct FakeCompletion {
    reply: Result<String, u16>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeCompletion {
    pub fn replying(content: &str) -> Self {
        Self {
            reply: Ok(content.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_user_prompt(&self) -> String {
        self.requests()
            .last()
            .and_then(|request| request.messages.last())
            .map(|message| message.content.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionProvider for FakeCompletion {
    async fn complete(&self, request: &CompletionRequest) -> ProviderResult<String> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(content) => Ok(content.clone()),
            Err(status) => Err(ProviderError::Status {
                status: *status,
                body: "simulated failure".to_string(),
            }),
        }
    }
}
