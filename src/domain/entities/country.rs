use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Two-letter region identifier, always uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Normalizes a raw country value. Returns `None` unless the trimmed
    /// input is exactly two ASCII letters.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(Self(trimmed.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn us() -> Self {
        Self("US".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw).ok_or_else(|| format!("Invalid country code: {}", raw))
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable country -> public holiday calendar table.
///
/// Lookups are total: any country without an entry resolves to the US
/// calendar.
#[derive(Debug, Clone)]
pub struct CalendarDirectory {
    calendars: HashMap<CountryCode, String>,
    us_calendar: String,
}

pub const US_HOLIDAY_CALENDAR: &str = "en.usa#holiday@group.v.calendar.google.com";

impl Default for CalendarDirectory {
    fn default() -> Self {
        Self::new()
            .with_entry("PK", "en.pk#holiday@group.v.calendar.google.com")
            .with_entry("IN", "en.indian#holiday@group.v.calendar.google.com")
            .with_entry("GB", "en.uk#holiday@group.v.calendar.google.com")
    }
}

impl CalendarDirectory {
    /// Directory holding only the US calendar.
    pub fn new() -> Self {
        let mut calendars = HashMap::new();
        calendars.insert(CountryCode::us(), US_HOLIDAY_CALENDAR.to_string());
        Self {
            calendars,
            us_calendar: US_HOLIDAY_CALENDAR.to_string(),
        }
    }

    /// Adds (or replaces) a mapping. Codes that are not two letters are ignored.
    pub fn with_entry(mut self, country: &str, calendar_id: &str) -> Self {
        if let Some(code) = CountryCode::parse(country) {
            if code == CountryCode::us() {
                self.us_calendar = calendar_id.to_string();
            }
            self.calendars.insert(code, calendar_id.to_string());
        }
        self
    }

    pub fn resolve(&self, country: &CountryCode) -> &str {
        self.calendars
            .get(country)
            .map(String::as_str)
            .unwrap_or(&self.us_calendar)
    }

    pub fn contains(&self, country: &CountryCode) -> bool {
        self.calendars.contains_key(country)
    }
}
