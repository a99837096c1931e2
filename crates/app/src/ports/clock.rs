//! Clock port — source of the local wall-clock time.

use chrono::{DateTime, Local};

/// Supplies the local time used to stamp refreshes.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// [`Clock`] backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        solarheat_domain::time::local_now()
    }
}
