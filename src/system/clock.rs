//! Wall clock.

use chrono::{DateTime, Local};

pub trait Clock: Send + Sync {
    /// Current local time
    fn now(&self) -> DateTime<Local>;

    /// Seconds since the Unix epoch
    fn unix_now(&self) -> i64 {
        self.now().timestamp()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
