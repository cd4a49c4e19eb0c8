use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::provider::Synthesizer;
use crate::error::ServiceError;
use crate::speech::types::{AudioData, Voice};

/// Mock behavior for the mock synthesizer
#[derive(Debug, Clone, Default)]
pub enum MockSynthesisBehavior {
    /// Return a short silent PCM buffer.
    #[default]
    Silence,
    /// Always fail with an opaque service error.
    AlwaysError,
}

#[derive(Debug, Clone)]
pub struct CapturedSynthesisRequest {
    pub text: String,
    pub voice_id: String,
}

/// Mock text-to-speech service for testing
#[derive(Clone, Default)]
pub struct MockSynthesizer {
    behavior: Arc<Mutex<MockSynthesisBehavior>>,
    captured_requests: Arc<Mutex<Vec<CapturedSynthesisRequest>>>,
}

impl MockSynthesizer {
    pub fn new(behavior: MockSynthesisBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.captured_requests.lock().unwrap().len()
    }

    pub fn last_captured_request(&self) -> Option<CapturedSynthesisRequest> {
        self.captured_requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Synthesizer for MockSynthesizer {
    fn default_voice(&self) -> Voice {
        Voice::lisa()
    }

    async fn synthesize(&self, text: &str, voice: &Voice) -> Result<AudioData, ServiceError> {
        self.captured_requests
            .lock()
            .unwrap()
            .push(CapturedSynthesisRequest {
                text: text.to_string(),
                voice_id: voice.id.clone(),
            });

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            // 100ms of silence at 16 kHz mono i16
            MockSynthesisBehavior::Silence => Ok(AudioData::pcm_16k_mono(vec![0u8; 3200])),
            MockSynthesisBehavior::AlwaysError => Err(ServiceError::malformed(
                "text to speech",
                "mock synthesis error",
            )),
        }
    }
}
