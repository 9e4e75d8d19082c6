use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::application::TextGenerator;
use async_trait::async_trait;
use careerkit_errors::AppError;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Client for the hosted Generative Language API. The key travels as a
/// query parameter, per the provider's scheme.
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_api_url(GEMINI_API_URL.to_string(), api_key)
    }

    /// Used by tests and alternative deployments to point at another endpoint.
    pub fn with_api_url(api_url: String, api_key: String) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let request = GenerateContentRequest::new(prompt);

        let response = self
            .http_client
            .post(&self.api_url)
            .query(&[("key", &self.api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("generation API error: {} - {}", status, body);
            return Err(AppError::from_provider(Some(status.as_u16()), &body));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        completion
            .first_text()
            .ok_or_else(|| AppError::Generation("model returned no candidates".to_string()))
    }
}
