use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

const DAILY_REQUEST_LIMIT: u32 = 200;

/// Daily request budget across all sessions, reset at the UTC date change.
pub struct UsageTracker {
    daily_requests: AtomicU32,
    last_reset: Mutex<DateTime<Utc>>,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self {
            daily_requests: AtomicU32::new(0),
            last_reset: Mutex::new(Utc::now()),
        }
    }

    pub fn check_and_increment(&self) -> Result<(), UsageLimitError> {
        self.maybe_reset_daily();

        if self.daily_requests.load(Ordering::SeqCst) >= DAILY_REQUEST_LIMIT {
            return Err(UsageLimitError::DailyRequestLimitReached);
        }

        self.daily_requests.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    pub fn remaining_requests(&self) -> u32 {
        DAILY_REQUEST_LIMIT.saturating_sub(self.daily_requests.load(Ordering::SeqCst))
    }

    fn maybe_reset_daily(&self) {
        let now = Utc::now();
        let mut last_reset = self.last_reset.lock().unwrap();

        if now.date_naive() != last_reset.date_naive() {
            self.daily_requests.store(0, Ordering::SeqCst);
            *last_reset = now;
            tracing::info!("Daily usage tracker reset");
        }
    }
}

impl Default for UsageTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub enum UsageLimitError {
    DailyRequestLimitReached,
}

impl UsageLimitError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::DailyRequestLimitReached => {
                "The daily generation budget is used up. Try again tomorrow."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_the_daily_budget() {
        let tracker = UsageTracker::new();
        let before = tracker.remaining_requests();
        tracker.check_and_increment().unwrap();
        assert_eq!(tracker.remaining_requests(), before - 1);
    }
}
