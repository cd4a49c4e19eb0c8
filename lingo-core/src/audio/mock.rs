use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use async_trait::async_trait;

use super::Playback;
use crate::speech::types::AudioData;

/// Mock playback for tests: records what was played instead of touching
/// an output device.
#[derive(Clone, Default)]
pub struct MockPlayer {
    fail: Arc<Mutex<bool>>,
    played: Arc<Mutex<Vec<AudioData>>>,
}

impl MockPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let player = Self::default();
        *player.fail.lock().unwrap() = true;
        player
    }

    pub fn play_count(&self) -> usize {
        self.played.lock().unwrap().len()
    }
}

#[async_trait(?Send)]
impl Playback for MockPlayer {
    async fn play_to_end(&self, audio: AudioData) -> Result<()> {
        if *self.fail.lock().unwrap() {
            bail!("mock playback failure");
        }
        self.played.lock().unwrap().push(audio);
        Ok(())
    }
}
