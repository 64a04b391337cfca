use crate::domain::entities::{holiday_names, CalendarDirectory, CountryCode, DayWindow, HolidayList};
use crate::domain::ports::CalendarProvider;
use crate::services::resilience::resilient;
use std::sync::Arc;
use tracing::debug;

pub const CALENDAR_COMPONENT: &str = "google_calendar";

/// Looks up the public holidays falling on the caller's local day
#[derive(Clone)]
pub struct HolidayService {
    calendar: Arc<dyn CalendarProvider>,
    directory: Arc<CalendarDirectory>,
}

impl HolidayService {
    pub fn new(calendar: Arc<dyn CalendarProvider>, directory: CalendarDirectory) -> Self {
        Self {
            calendar,
            directory: Arc::new(directory),
        }
    }

    /// Calendar identifier used for `country`; unmapped countries get the US calendar.
    pub fn calendar_for(&self, country: &CountryCode) -> &str {
        self.directory.resolve(country)
    }

    /// Holiday names in calendar order. Any lookup failure yields an empty list.
    pub async fn fetch_holidays(&self, country: &CountryCode, window: &DayWindow) -> HolidayList {
        let calendar_id = self.calendar_for(country);
        debug!(
            country = %country,
            calendar_id,
            start = %window.start,
            end = %window.end,
            "Fetching holidays"
        );

        let lookup = async {
            self.calendar
                .list_events(calendar_id, window)
                .await
                .map(holiday_names)
        };

        resilient(CALENDAR_COMPONENT, lookup, Vec::new).await
    }
}
