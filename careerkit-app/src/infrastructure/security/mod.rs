mod rate_limiter;
mod usage_tracker;

pub use rate_limiter::{RateLimitError, RateLimiter};
pub use usage_tracker::{UsageLimitError, UsageTracker};
