use crate::application::GenerateContent;
use crate::infrastructure::gemini::GeminiClient;
use crate::infrastructure::retry::RetryPolicy;
use crate::infrastructure::security::{RateLimiter, UsageTracker};
use std::sync::Arc;

/// Explicit wiring of the generation pipeline. Built once at startup and
/// injected into server functions; nothing here is a process-wide global.
#[derive(Clone)]
pub struct AppContext {
    pub generate_content: Arc<GenerateContent>,
    pub rate_limiter: RateLimiter,
    pub usage_tracker: Arc<UsageTracker>,
}

impl AppContext {
    pub fn new(api_key: String) -> Self {
        let client = Arc::new(GeminiClient::new(api_key));
        Self {
            generate_content: Arc::new(GenerateContent::new(client, RetryPolicy::default())),
            rate_limiter: RateLimiter::new(),
            usage_tracker: Arc::new(UsageTracker::new()),
        }
    }

    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");
        tracing::info!("Using Gemini backend");
        Self::new(api_key)
    }
}
