use chrono::{DateTime, Local};

#[cfg(test)]
use mockall::automock;

/// Represents an entity responsible for providing dates across the
/// application. This can allow it to be used for testing
#[cfg_attr(test, automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
