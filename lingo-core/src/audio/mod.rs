pub mod mock;
pub mod playback;

use anyhow::Result;
use async_trait::async_trait;

use crate::speech::types::AudioData;

pub use playback::AudioPlayer;

/// A facility that can play a synthesized audio stream.
///
/// Playback is strictly play-to-completion: no pause, no seek, no
/// cancel. The trait exists so the screen actor can run against a mock
/// player in tests; `AudioPlayer` is the real cpal-backed
/// implementation. Not `Send` - the actor runs on a LocalSet and cpal
/// streams must stay on their thread.
#[async_trait(?Send)]
pub trait Playback {
    /// Play the audio through the output device, returning once the
    /// stream has been consumed in full.
    async fn play_to_end(&self, audio: AudioData) -> Result<()>;
}
