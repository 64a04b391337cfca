use serde::{Deserialize, Serialize};

/// Holiday names occurring on one local day, in the calendar's start-time order
pub type HolidayList = Vec<String>;

/// Single occurrence returned by a holiday calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub summary: String,
}

impl CalendarEvent {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }
}

pub fn holiday_names(events: Vec<CalendarEvent>) -> HolidayList {
    events.into_iter().map(|event| event.summary).collect()
}
