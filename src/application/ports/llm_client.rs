use async_trait::async_trait;

/// Chat-completion client. Returns the first completion's textual content
/// with surrounding whitespace removed.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(
        &self,
        model_id: &str,
        temperature: f32,
        system_prompt: &str,
        user_content: &str,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
