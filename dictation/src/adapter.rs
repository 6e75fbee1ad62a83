//! Voice input adapter.
//!
//! Bridges one utterance from a [`SpeechCapability`] to one numeric field
//! of the active calculator. Responsibilities:
//!   • hold the "listening" indicator while a capture is in flight
//!   • enforce a single outstanding recognition session per adapter
//!   • extract the first numeric token from the final transcript
//!   • hand the value back, routed to the field that requested it
//!
//! The listening indicator is cleared on *every* exit path (success,
//! recognition error, missing token) by an RAII guard, so a failed
//! capture can never leave a stale indicator behind.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::Instrument;

use calc::Preview;
use common::TraceId;
use common::logger::spans::root_span;
use session::CalcSession;

use crate::capability::{SpeechCapability, SpeechError};
use crate::target::InputTarget;
use crate::transcript::first_numeric_token;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DictationError {
    #[error("speech recognition is not available on this platform")]
    CapabilityUnavailable,

    #[error("another voice capture is already listening")]
    SessionBusy,

    #[error("no number could be recognized in the transcript")]
    NoNumericToken,

    #[error(transparent)]
    Speech(#[from] SpeechError),
}

/// A number extracted from one utterance, still addressed to the field
/// that asked for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapturedValue {
    pub target: InputTarget,
    pub value: f64,
}

/// One voice-input adapter instance. Cloning shares the capability and the
/// listening slot, so clones still count against the same
/// single-session guard.
#[derive(Clone)]
pub struct VoiceInput {
    capability: Option<Arc<dyn SpeechCapability>>,
    locale: String,
    listening: Arc<Mutex<Option<InputTarget>>>,
}

impl VoiceInput {
    pub fn new(capability: Arc<dyn SpeechCapability>, locale: &str) -> Self {
        Self {
            capability: Some(capability),
            locale: locale.to_string(),
            listening: Arc::new(Mutex::new(None)),
        }
    }

    /// Adapter for a platform without a speech engine; every capture fails
    /// with [`DictationError::CapabilityUnavailable`].
    pub fn unavailable(locale: &str) -> Self {
        Self {
            capability: None,
            locale: locale.to_string(),
            listening: Arc::new(Mutex::new(None)),
        }
    }

    /// The target currently holding the listening indicator, if any.
    pub fn listening_target(&self) -> Option<InputTarget> {
        *self.listening.lock()
    }

    /// Run one recognition session aimed at `target`.
    ///
    /// At most one capture may be listening at a time; a second activation
    /// is rejected with [`DictationError::SessionBusy`] and does not
    /// disturb the session already in flight.
    pub async fn capture(&self, target: InputTarget) -> Result<CapturedValue, DictationError> {
        let trace_id = TraceId::default();
        let span = root_span("voice_capture", &trace_id);
        self.capture_guarded(target).instrument(span).await
    }

    async fn capture_guarded(&self, target: InputTarget) -> Result<CapturedValue, DictationError> {
        let Some(capability) = self.capability.as_ref() else {
            return Err(DictationError::CapabilityUnavailable);
        };

        // Guard drops on every exit path below, clearing the indicator.
        let _listening = ListeningGuard::acquire(&self.listening, target)?;

        tracing::info!(field = %target, locale = %self.locale, "listening");

        let transcript = capability.recognize_once(&self.locale).await?;

        let Some(value) = first_numeric_token(&transcript) else {
            tracing::warn!(field = %target, "transcript contained no numeric token");
            return Err(DictationError::NoNumericToken);
        };

        tracing::info!(field = %target, value, "numeric token captured");
        Ok(CapturedValue { target, value })
    }
}

/// Route a captured value to the calculator mode owning its target and
/// return the recomputed preview. A capture never confirms.
pub fn route(captured: &CapturedValue, session: &mut CalcSession) -> Preview {
    match captured.target {
        InputTarget::Price => session.set_price(Some(captured.value)),
        InputTarget::Volume => session.set_volume(Some(captured.value)),
        InputTarget::DiscountPrice => session.set_discount_price(Some(captured.value)),
        InputTarget::DiscountRate => session.set_discount_rate(Some(captured.value)),
    }
}

/// Occupies the listening slot for the duration of one capture.
struct ListeningGuard<'a> {
    slot: &'a Mutex<Option<InputTarget>>,
}

impl<'a> ListeningGuard<'a> {
    fn acquire(
        slot: &'a Mutex<Option<InputTarget>>,
        target: InputTarget,
    ) -> Result<Self, DictationError> {
        let mut listening = slot.lock();
        if listening.is_some() {
            return Err(DictationError::SessionBusy);
        }
        *listening = Some(target);
        Ok(Self { slot })
    }
}

impl Drop for ListeningGuard<'_> {
    fn drop(&mut self) {
        *self.slot.lock() = None;
    }
}
