pub mod adapter;
pub mod capability;
pub mod target;
pub mod transcript;

pub use adapter::{CapturedValue, DictationError, VoiceInput, route};
pub use capability::{SpeechCapability, SpeechError};
pub use target::InputTarget;
pub use transcript::first_numeric_token;
