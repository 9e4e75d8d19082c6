use crate::domain::{validation, GenerationRequest, GenerationResult};
use crate::infrastructure::processor;
use crate::infrastructure::prompt::build_prompt;
use crate::infrastructure::retry::RetryPolicy;
use async_trait::async_trait;
use careerkit_errors::AppError;
use std::sync::Arc;

/// Boundary to the external text-generation service. The hosted client
/// implements it in production; tests substitute a double.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

/// Use case: turn a (category, profile) pair into processed, exportable
/// content via the external model.
pub struct GenerateContent {
    generator: Arc<dyn TextGenerator>,
    retry_policy: RetryPolicy,
}

impl GenerateContent {
    pub fn new(generator: Arc<dyn TextGenerator>, retry_policy: RetryPolicy) -> Self {
        Self {
            generator,
            retry_policy,
        }
    }

    pub async fn execute(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, AppError> {
        let errors = validation::validate(&request.profile);
        if let Some((field, message)) = errors.into_iter().next() {
            return Err(AppError::Validation(format!(
                "{}: {}",
                field.label(),
                message
            )));
        }

        let prompt = build_prompt(request.category, &request.profile);
        if prompt.is_empty() {
            // Never contact the provider without an instruction to send.
            return Err(AppError::Validation("nothing to generate".to_string()));
        }

        let generator = Arc::clone(&self.generator);
        let raw = self
            .retry_policy
            .run(|| {
                let generator = Arc::clone(&generator);
                let prompt = prompt.clone();
                async move { generator.generate(&prompt).await }
            })
            .await?;

        tracing::debug!(
            category = request.category.label(),
            chars = raw.len(),
            "generation succeeded"
        );

        Ok(processor::process(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Profile};
    use std::sync::atomic::{AtomicU32, Ordering};

    fn request(category: Category, profile: Profile) -> GenerationRequest {
        GenerationRequest { category, profile }
    }

    struct MockGenerator {
        reply: &'static str,
        calls: AtomicU32,
    }

    impl MockGenerator {
        fn new(reply: &'static str) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicU32::new(0),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.to_string())
        }
    }

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: std::time::Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn follow_up_email_end_to_end() {
        let mock = MockGenerator::new("**Thank you** for the interview.");
        let use_case = GenerateContent::new(mock.clone(), fast_policy());

        let result = use_case
            .execute(&request(Category::FollowUpEmail, Profile::demo()))
            .await
            .unwrap();

        assert!(result.html.contains("<strong>Thank you</strong>"));
        assert_eq!(result.plain_text, "**Thank you** for the interview.");
        assert_eq!(mock.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalid_profile_never_reaches_the_generator() {
        let mock = MockGenerator::new("unused");
        let use_case = GenerateContent::new(mock.clone(), fast_policy());

        let mut profile = Profile::demo();
        profile.employee_name.clear();

        let result = use_case
            .execute(&request(Category::CoverLetter, profile))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
    }

    struct FlakyGenerator {
        calls: AtomicU32,
    }

    #[async_trait]
    impl TextGenerator for FlakyGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n == 0 {
                Err(AppError::Generation("transient".to_string()))
            } else {
                Ok("Recovered.".to_string())
            }
        }
    }

    #[tokio::test]
    async fn transient_failures_are_retried() {
        let flaky = Arc::new(FlakyGenerator {
            calls: AtomicU32::new(0),
        });
        let use_case = GenerateContent::new(flaky.clone(), fast_policy());

        let result = use_case
            .execute(&request(Category::CoverLetter, Profile::demo()))
            .await
            .unwrap();
        assert_eq!(result.plain_text, "Recovered.");
        assert_eq!(flaky.calls.load(Ordering::SeqCst), 2);
    }
}
