use async_trait::async_trait;

use crate::error::ServiceError;
use crate::speech::types::{AudioData, Voice};

/// Trait for text-to-speech services
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// The voice used when the caller has no preference.
    fn default_voice(&self) -> Voice;

    /// Synthesize `text` into playable audio with the given voice.
    async fn synthesize(&self, text: &str, voice: &Voice) -> Result<AudioData, ServiceError>;
}
