use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Invalid credential: {0}")]
    Credential(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Classifies a provider failure by HTTP status and error text.
    ///
    /// 429 or "rate limit" wording maps to `RateLimited`, 401/403 or
    /// "API key" wording to `Credential`, everything else to `Generation`.
    pub fn from_provider(status: Option<u16>, message: &str) -> Self {
        let lower = message.to_lowercase();
        match status {
            Some(429) => AppError::RateLimited(message.to_string()),
            Some(401) | Some(403) => AppError::Credential(message.to_string()),
            _ if lower.contains("rate limit") => AppError::RateLimited(message.to_string()),
            _ if lower.contains("api key") => AppError::Credential(message.to_string()),
            _ => AppError::Generation(message.to_string()),
        }
    }

    /// Whether the retry wrapper may re-issue the call for this failure.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Generation(_) | AppError::Internal(_))
    }

    pub fn user_message(&self) -> &str {
        match self {
            Self::Validation(_) => "Please fix the highlighted fields and try again.",
            Self::RateLimited(_) => "Too many requests right now. Wait a moment and try again.",
            Self::Credential(_) => {
                "The generation service rejected the API key. Check the server configuration."
            }
            Self::Generation(_) => "Content generation failed. Try again.",
            Self::Internal(_) => "Something went wrong on the server. Try again later.",
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let (status, message) = match &self {
                AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                AppError::RateLimited(msg) => (StatusCode::TOO_MANY_REQUESTS, msg.clone()),
                AppError::Credential(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
                AppError::Generation(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
                AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            };
            (status, Json(ErrorResponse { message })).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_429_is_rate_limited() {
        assert!(matches!(
            AppError::from_provider(Some(429), "quota exceeded"),
            AppError::RateLimited(_)
        ));
    }

    #[test]
    fn rate_limit_text_is_rate_limited() {
        assert!(matches!(
            AppError::from_provider(Some(500), "provider rate limit reached"),
            AppError::RateLimited(_)
        ));
    }

    #[test]
    fn auth_statuses_are_credential_errors() {
        assert!(matches!(
            AppError::from_provider(Some(401), "unauthorized"),
            AppError::Credential(_)
        ));
        assert!(matches!(
            AppError::from_provider(Some(403), "forbidden"),
            AppError::Credential(_)
        ));
        assert!(matches!(
            AppError::from_provider(None, "API key not valid"),
            AppError::Credential(_)
        ));
    }

    #[test]
    fn other_failures_are_generation_errors() {
        let err = AppError::from_provider(Some(503), "upstream unavailable");
        assert!(matches!(err, AppError::Generation(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn rate_limited_and_credential_are_terminal() {
        assert!(!AppError::RateLimited("x".into()).is_retryable());
        assert!(!AppError::Credential("x".into()).is_retryable());
    }
}
