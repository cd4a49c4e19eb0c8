use async_trait::async_trait;

use crate::error::ServiceError;
use crate::speech::types::AudioData;

/// Trait for speech-to-text services.
///
/// No UI control drives transcription yet; the microphone affordance on
/// the screen is intentionally unwired. The client exists so the wiring
/// is a one-line change when it lands.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe a complete utterance. Returns the best hypothesis only.
    async fn transcribe(&self, audio: &AudioData) -> Result<String, ServiceError>;
}
