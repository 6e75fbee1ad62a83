use async_trait::async_trait;

use dictation::{SpeechCapability, SpeechError};

/// Stand-in speech engine that reads one typed line as the final
/// transcript. The real engine is a platform capability outside this
/// workspace; the adapter treats both identically.
pub struct TypedSpeech;

#[async_trait]
impl SpeechCapability for TypedSpeech {
    async fn recognize_once(&self, _locale: &str) -> Result<String, SpeechError> {
        let line = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            std::io::stdin()
                .read_line(&mut line)
                .map(|_| line)
                .map_err(|e| SpeechError::Recognition(e.to_string()))
        })
        .await
        .map_err(|e| SpeechError::Recognition(e.to_string()))??;

        let transcript = line.trim();
        if transcript.is_empty() {
            return Err(SpeechError::NoResult);
        }
        Ok(transcript.to_string())
    }
}
