use crate::domain::entities::{
    CountryCode, GreetingText, HolidayList, LocalMoment, TimeOfDayLabel,
};
use crate::domain::ports::Clock;
use crate::services::greeting_composer::GreetingComposer;
use crate::services::holiday_service::HolidayService;
use crate::services::locator::Locator;
use std::sync::Arc;
use tracing::info;

/// Everything the pipeline derived for one login
#[derive(Debug, Clone)]
pub struct LoginMessage {
    pub moment: LocalMoment,
    pub country: CountryCode,
    pub holidays: HolidayList,
    pub time_of_day: TimeOfDayLabel,
    pub greeting: GreetingText,
}

/// Program output: the local time (RFC 3339) on the first line, the greeting
/// on the second.
impl std::fmt::Display for LoginMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.moment, self.greeting)
    }
}

/// Runs country detection, holiday lookup, time-of-day classification and
/// greeting generation, in that order.
#[derive(Clone)]
pub struct LoginMessageService {
    locator: Locator,
    holidays: HolidayService,
    composer: GreetingComposer,
    clock: Arc<dyn Clock>,
}

impl LoginMessageService {
    pub fn new(
        locator: Locator,
        holidays: HolidayService,
        composer: GreetingComposer,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            locator,
            holidays,
            composer,
            clock,
        }
    }

    pub async fn generate_login_message(&self, user_name: Option<&str>) -> GreetingText {
        self.run(user_name).await.greeting
    }

    /// Full pipeline. The clock is read once so the holiday window and the
    /// time-of-day label describe the same instant.
    pub async fn run(&self, user_name: Option<&str>) -> LoginMessage {
        let country = self.locator.detect_country().await;
        let moment = self.clock.now_local();

        let holidays = self
            .holidays
            .fetch_holidays(&country, &moment.day_window())
            .await;

        let time_of_day = moment.time_of_day();
        let greeting = self
            .composer
            .compose(&holidays, time_of_day, user_name)
            .await;

        info!(
            country = %country,
            holidays = holidays.len(),
            time_of_day = %time_of_day,
            "Login greeting generated"
        );

        LoginMessage {
            moment,
            country,
            holidays,
            time_of_day,
            greeting,
        }
    }
}
