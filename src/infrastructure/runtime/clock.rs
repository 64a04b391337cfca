use crate::domain::entities::LocalMoment;
use crate::domain::ports::Clock;
use chrono::{Local, Utc};
use chrono_tz::Tz;

/// Reads the system clock with the machine's local offset
#[derive(Clone, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_local(&self) -> LocalMoment {
        LocalMoment::new(Local::now().fixed_offset())
    }
}

/// Reads the system clock in a fixed IANA timezone
#[derive(Clone)]
pub struct ZonedClock {
    tz: Tz,
}

impl ZonedClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for ZonedClock {
    fn now_local(&self) -> LocalMoment {
        LocalMoment::new(Utc::now().with_timezone(&self.tz).fixed_offset())
    }
}
