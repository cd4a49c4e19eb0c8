//! Watson Text to Speech v1 client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::provider::Synthesizer;
use crate::error::ServiceError;
use crate::settings::Credentials;
use crate::speech::types::{AudioData, Voice};

const SERVICE: &str = "text to speech";
const DEFAULT_ENDPOINT: &str = "https://stream.watsonplatform.net/text-to-speech/api";
const TIMEOUT_SECS: u64 = 60;

// Raw PCM avoids any codec work on the playback side.
const ACCEPT_FORMAT: &str = "audio/l16;rate=16000";

#[derive(Debug, Clone)]
pub struct WatsonSynthesizerConfig {
    pub credentials: Credentials,
    pub endpoint: String,
}

impl WatsonSynthesizerConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

pub struct WatsonSynthesizer {
    client: Client,
    config: WatsonSynthesizerConfig,
}

impl WatsonSynthesizer {
    pub fn new(config: WatsonSynthesizerConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }
}

#[derive(Serialize)]
struct SynthesizeRequest<'a> {
    text: &'a str,
}

#[async_trait]
impl Synthesizer for WatsonSynthesizer {
    fn default_voice(&self) -> Voice {
        Voice::lisa()
    }

    async fn synthesize(&self, text: &str, voice: &Voice) -> Result<AudioData, ServiceError> {
        let url = format!("{}/v1/synthesize", self.config.endpoint);
        debug!(voice = %voice.id, chars = text.len(), "synthesize request");

        let response = self
            .client
            .post(&url)
            .basic_auth(
                &self.config.credentials.username,
                Some(&self.config.credentials.password),
            )
            .query(&[("voice", voice.id.as_str()), ("accept", ACCEPT_FORMAT)])
            .json(&SynthesizeRequest { text })
            .send()
            .await
            .map_err(|e| ServiceError::transport(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::from_body(SERVICE, status.as_u16(), &body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ServiceError::transport(SERVICE, e))?
            .to_vec();

        into_audio(bytes)
    }
}

fn into_audio(bytes: Vec<u8>) -> Result<AudioData, ServiceError> {
    if bytes.is_empty() {
        return Err(ServiceError::malformed(SERVICE, "empty audio stream"));
    }

    Ok(AudioData::pcm_16k_mono(bytes))
}
