//! LLM — remote text-generation adapter.
//!
//! DESIGN
//! ======
//! One provider (Gemini generateContent), one operation. `LlmClient`
//! owns the HTTP client for the process lifetime and is handed to the
//! conversation manager as `Arc<dyn GenerateText>`, so tests substitute
//! a mock instead of touching the network. Startup failure is non-fatal:
//! the service runs without a client and each send degrades to the
//! fallback message instead.

pub mod config;
pub mod gemini;
pub mod types;

use config::LlmConfig;
pub use types::GenerateText;
use types::{GenerateResponse, LlmError, Turn};

/// Concrete LLM client configured from environment variables.
pub struct LlmClient {
    inner: gemini::GeminiClient,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client
    /// fails to build.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_config(LlmConfig::from_env()?)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        Ok(Self { inner: gemini::GeminiClient::new(config)? })
    }

    /// Return the configured model name (e.g. `"gemini-2.0-flash"`).
    #[must_use]
    pub fn model(&self) -> &str {
        self.inner.model()
    }
}

#[async_trait::async_trait]
impl GenerateText for LlmClient {
    async fn generate(&self, system: &str, turns: &[Turn]) -> Result<GenerateResponse, LlmError> {
        self.inner.generate(system, turns).await
    }
}
