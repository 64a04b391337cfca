use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Local date/time with the UTC offset captured when the clock was read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMoment(DateTime<FixedOffset>);

impl LocalMoment {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self(at)
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    pub fn offset(&self) -> FixedOffset {
        *self.0.offset()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Local midnight through local 23:59:59.999999 of this moment's date,
    /// both converted to UTC with the captured offset.
    pub fn day_window(&self) -> DayWindow {
        let start_local = self.0.date_naive().and_time(NaiveTime::MIN);
        let end_local = start_local + Duration::days(1) - Duration::microseconds(1);

        DayWindow {
            start: self.local_to_utc(start_local),
            end: self.local_to_utc(end_local),
        }
    }

    pub fn time_of_day(&self) -> TimeOfDayLabel {
        TimeOfDayLabel::from_hour(self.hour())
    }

    fn local_to_utc(&self, local: NaiveDateTime) -> DateTime<Utc> {
        let offset = Duration::seconds(i64::from(self.offset().local_minus_utc()));
        Utc.from_utc_datetime(&(local - offset))
    }
}

impl std::fmt::Display for LocalMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// UTC bounds of one local calendar day. `end` is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Coarse time-of-day bucket used to tone the greeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDayLabel {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDayLabel {
    /// 5-11 Morning, 12-16 Afternoon, 17-20 Evening, anything else Night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDayLabel::Morning,
            12..=16 => TimeOfDayLabel::Afternoon,
            17..=20 => TimeOfDayLabel::Evening,
            _ => TimeOfDayLabel::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDayLabel::Morning => "Morning",
            TimeOfDayLabel::Afternoon => "Afternoon",
            TimeOfDayLabel::Evening => "Evening",
            TimeOfDayLabel::Night => "Night",
        }
    }
}

impl std::fmt::Display for TimeOfDayLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn day_window(moment: &LocalMoment) -> DayWindow {
    moment.day_window()
}

pub fn time_of_day(moment: &LocalMoment) -> TimeOfDayLabel {
    moment.time_of_day()
}
