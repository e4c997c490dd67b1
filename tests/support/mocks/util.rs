// tests/support/mocks/util.rs
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

use berita_core::application::ports::time::Clock;

#[derive(Clone)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Advances one minute on every call so that creation order is observable.
pub struct SteppingClock {
    current: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(super::time::fixed_now()),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.current.lock().unwrap();
        *current += Duration::minutes(1);
        *current
    }
}
