pub mod gemini;

use crate::domain::error::Result;
use async_trait::async_trait;

/// Text-generation backend for statement insights. Kept behind a trait so
/// handlers and use cases can be exercised with a scripted client in tests.
#[async_trait]
pub trait LLMClient {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
