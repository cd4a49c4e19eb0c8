use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::provider::Transcriber;
use crate::error::ServiceError;
use crate::speech::types::AudioData;

/// Mock behavior for the mock transcriber
#[derive(Debug, Clone)]
pub enum MockTranscribeBehavior {
    /// Return a fixed transcript.
    Fixed { transcript: String },
    /// Always fail with an opaque service error.
    AlwaysError,
}

impl Default for MockTranscribeBehavior {
    fn default() -> Self {
        Self::Fixed {
            transcript: "mock transcript".to_string(),
        }
    }
}

/// Mock speech-to-text service for testing
#[derive(Clone, Default)]
pub struct MockTranscriber {
    behavior: Arc<Mutex<MockTranscribeBehavior>>,
    received_bytes: Arc<Mutex<Vec<usize>>>,
}

impl MockTranscriber {
    pub fn new(behavior: MockTranscribeBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            received_bytes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.received_bytes.lock().unwrap().len()
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, audio: &AudioData) -> Result<String, ServiceError> {
        self.received_bytes
            .lock()
            .unwrap()
            .push(audio.pcm_data.len());

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            MockTranscribeBehavior::Fixed { transcript } => Ok(transcript),
            MockTranscribeBehavior::AlwaysError => Err(ServiceError::malformed(
                "speech to text",
                "mock transcription error",
            )),
        }
    }
}
