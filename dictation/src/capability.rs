use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the platform speech engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("recognition error: {0}")]
    Recognition(String),

    #[error("recognition ended without a transcript")]
    NoResult,
}

/// Abstraction over a platform speech-to-text engine.
///
/// One call is one utterance: the engine listens, produces a single final
/// transcript and stops. No interim results cross this boundary. Real
/// engines live outside this workspace; tests use scripted mocks.
#[async_trait]
pub trait SpeechCapability: Send + Sync {
    async fn recognize_once(&self, locale: &str) -> Result<String, SpeechError>;
}
