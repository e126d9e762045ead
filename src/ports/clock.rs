use chrono::{DateTime, Utc};

/// Port for wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// System clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
