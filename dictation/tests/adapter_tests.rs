use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use calc::{CalcMode, Preview};
use dictation::adapter::{DictationError, VoiceInput, route};
use dictation::capability::{SpeechCapability, SpeechError};
use dictation::target::InputTarget;
use session::CalcSession;

/// Capability returning a fixed transcript immediately.
struct ScriptedSpeech {
    transcript: &'static str,
}

#[async_trait]
impl SpeechCapability for ScriptedSpeech {
    async fn recognize_once(&self, _locale: &str) -> Result<String, SpeechError> {
        Ok(self.transcript.to_string())
    }
}

/// Capability that always fails like a platform audio error.
struct FailingSpeech;

#[async_trait]
impl SpeechCapability for FailingSpeech {
    async fn recognize_once(&self, _locale: &str) -> Result<String, SpeechError> {
        Err(SpeechError::Recognition("audio-capture".to_string()))
    }
}

/// Capability that stays "listening" until released, so tests can observe
/// the in-flight state deterministically.
struct HeldSpeech {
    release: Arc<Notify>,
}

#[async_trait]
impl SpeechCapability for HeldSpeech {
    async fn recognize_once(&self, _locale: &str) -> Result<String, SpeechError> {
        self.release.notified().await;
        Ok("42".to_string())
    }
}

fn adapter(capability: impl SpeechCapability + 'static) -> VoiceInput {
    VoiceInput::new(Arc::new(capability), "ja-JP")
}

#[tokio::test]
async fn capture_extracts_the_first_numeric_token() {
    let voice = adapter(ScriptedSpeech {
        transcript: "りんご2つで398円",
    });

    let captured = voice.capture(InputTarget::Price).await.unwrap();
    assert_eq!(captured.value, 2.0);
    assert_eq!(captured.target, InputTarget::Price);
}

#[tokio::test]
async fn captured_value_routes_to_its_calculator_as_a_preview() {
    let voice = adapter(ScriptedSpeech { transcript: "20%引き" });
    let mut session = CalcSession::new();
    session.set_discount_price(Some(1000.0));

    let captured = voice.capture(InputTarget::DiscountRate).await.unwrap();
    let preview = route(&captured, &mut session);

    assert_eq!(preview, Preview::Value(800.0));
    // Routing is a preview refresh, never a confirm.
    assert!(session.discount_history().is_empty());
    assert_eq!(captured.target.mode(), CalcMode::Discount);
}

#[tokio::test]
async fn transcript_without_digits_fails_and_clears_the_indicator() {
    let voice = adapter(ScriptedSpeech {
        transcript: "りんごをください",
    });

    let err = voice.capture(InputTarget::Volume).await.unwrap_err();
    assert_eq!(err, DictationError::NoNumericToken);
    assert_eq!(voice.listening_target(), None);
}

#[tokio::test]
async fn recognition_error_propagates_and_clears_the_indicator() {
    let voice = adapter(FailingSpeech);

    let err = voice.capture(InputTarget::Price).await.unwrap_err();
    assert_eq!(
        err,
        DictationError::Speech(SpeechError::Recognition("audio-capture".to_string()))
    );
    assert_eq!(voice.listening_target(), None);
}

#[tokio::test]
async fn missing_capability_is_reported_as_unavailable() {
    let voice = VoiceInput::unavailable("ja-JP");

    let err = voice.capture(InputTarget::Price).await.unwrap_err();
    assert_eq!(err, DictationError::CapabilityUnavailable);
    assert_eq!(voice.listening_target(), None);
}

#[tokio::test]
async fn second_activation_is_rejected_while_one_is_listening() {
    let release = Arc::new(Notify::new());
    let voice = adapter(HeldSpeech {
        release: Arc::clone(&release),
    });

    let first = tokio::spawn({
        let voice = voice.clone();
        async move { voice.capture(InputTarget::Price).await }
    });

    // Let the first capture reach its await point.
    tokio::task::yield_now().await;
    assert_eq!(voice.listening_target(), Some(InputTarget::Price));

    // A second target cannot start while the first is listening, and the
    // rejection must not disturb the in-flight session.
    let err = voice.capture(InputTarget::DiscountPrice).await.unwrap_err();
    assert_eq!(err, DictationError::SessionBusy);
    assert_eq!(voice.listening_target(), Some(InputTarget::Price));

    release.notify_one();
    let captured = first.await.unwrap().unwrap();
    assert_eq!(captured.value, 42.0);

    // Indicator released once the session finished.
    assert_eq!(voice.listening_target(), None);
}

#[tokio::test]
async fn indicator_is_free_again_after_a_completed_capture() {
    let voice = adapter(ScriptedSpeech { transcript: "250" });

    voice.capture(InputTarget::Volume).await.unwrap();
    assert_eq!(voice.listening_target(), None);

    // A fresh capture may start immediately.
    let captured = voice.capture(InputTarget::Price).await.unwrap();
    assert_eq!(captured.value, 250.0);
}
