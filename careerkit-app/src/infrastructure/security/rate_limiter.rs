use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

const MAX_REQUESTS_PER_MINUTE: u32 = 5;
const MAX_REQUESTS_PER_HOUR: u32 = 20;
const CLEANUP_INTERVAL_SECS: u64 = 300;

#[derive(Clone)]
struct RequestRecord {
    minute_count: u32,
    hour_count: u32,
    minute_start: Instant,
    hour_start: Instant,
}

impl Default for RequestRecord {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            minute_count: 0,
            hour_count: 0,
            minute_start: now,
            hour_start: now,
        }
    }
}

/// Rolling-window budget per browser session. Checked before any call
/// leaves for the provider, so an exhausted budget never costs a request.
#[derive(Clone)]
pub struct RateLimiter {
    requests: Arc<DashMap<String, RequestRecord>>,
    last_cleanup: Arc<std::sync::Mutex<Instant>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(DashMap::new()),
            last_cleanup: Arc::new(std::sync::Mutex::new(Instant::now())),
        }
    }

    pub fn check_rate_limit(&self, session_id: &str) -> Result<(), RateLimitError> {
        self.maybe_cleanup();

        let now = Instant::now();
        let mut record = self.requests.entry(session_id.to_string()).or_default();

        if now.duration_since(record.minute_start) > Duration::from_secs(60) {
            record.minute_count = 0;
            record.minute_start = now;
        }

        if now.duration_since(record.hour_start) > Duration::from_secs(3600) {
            record.hour_count = 0;
            record.hour_start = now;
        }

        if record.minute_count >= MAX_REQUESTS_PER_MINUTE {
            let wait_secs = 60 - now.duration_since(record.minute_start).as_secs();
            return Err(RateLimitError::TooManyRequestsPerMinute(wait_secs));
        }

        if record.hour_count >= MAX_REQUESTS_PER_HOUR {
            let wait_secs = 3600 - now.duration_since(record.hour_start).as_secs();
            return Err(RateLimitError::TooManyRequestsPerHour(wait_secs));
        }

        record.minute_count += 1;
        record.hour_count += 1;

        Ok(())
    }

    fn maybe_cleanup(&self) {
        let mut last_cleanup = self.last_cleanup.lock().unwrap();
        if last_cleanup.elapsed() > Duration::from_secs(CLEANUP_INTERVAL_SECS) {
            let cutoff = Instant::now() - Duration::from_secs(3600);
            self.requests.retain(|_, v| v.hour_start > cutoff);
            *last_cleanup = Instant::now();
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub enum RateLimitError {
    TooManyRequestsPerMinute(u64),
    TooManyRequestsPerHour(u64),
}

impl RateLimitError {
    pub fn message(&self) -> String {
        match self {
            Self::TooManyRequestsPerMinute(secs) => {
                format!("Too many requests. Wait {} seconds and try again.", secs)
            }
            Self::TooManyRequestsPerHour(secs) => {
                format!(
                    "Hourly limit reached. Try again in {} minutes.",
                    secs / 60
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_exhausts_within_the_minute_window() {
        let limiter = RateLimiter::new();
        for _ in 0..MAX_REQUESTS_PER_MINUTE {
            assert!(limiter.check_rate_limit("session-a").is_ok());
        }
        assert!(matches!(
            limiter.check_rate_limit("session-a"),
            Err(RateLimitError::TooManyRequestsPerMinute(_))
        ));
    }

    #[test]
    fn sessions_are_tracked_independently() {
        let limiter = RateLimiter::new();
        for _ in 0..MAX_REQUESTS_PER_MINUTE {
            limiter.check_rate_limit("session-a").unwrap();
        }
        assert!(limiter.check_rate_limit("session-b").is_ok());
    }
}
