use async_trait::async_trait;

use crate::domain::entities::{CalendarEvent, DayWindow};
use crate::domain::errors::ProviderResult;

/// Read-only access to public holiday calendars
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Single occurrences starting within `window` (inclusive), ordered by
    /// start time.
    async fn list_events(
        &self,
        calendar_id: &str,
        window: &DayWindow,
    ) -> ProviderResult<Vec<CalendarEvent>>;
}
