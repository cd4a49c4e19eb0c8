//! Watson Speech to Text v1 client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::provider::Transcriber;
use crate::error::ServiceError;
use crate::settings::Credentials;
use crate::speech::types::AudioData;

const SERVICE: &str = "speech to text";
const DEFAULT_ENDPOINT: &str = "https://stream.watsonplatform.net/speech-to-text/api";
const TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct WatsonTranscriberConfig {
    pub credentials: Credentials,
    pub endpoint: String,
}

impl WatsonTranscriberConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

pub struct WatsonTranscriber {
    client: Client,
    config: WatsonTranscriberConfig,
}

impl WatsonTranscriber {
    pub fn new(config: WatsonTranscriberConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }
}

#[derive(Deserialize)]
struct RecognizeResponse {
    results: Vec<RecognizeResult>,
}

#[derive(Deserialize)]
struct RecognizeResult {
    alternatives: Vec<RecognizeAlternative>,
}

#[derive(Deserialize)]
struct RecognizeAlternative {
    transcript: String,
}

#[async_trait]
impl Transcriber for WatsonTranscriber {
    async fn transcribe(&self, audio: &AudioData) -> Result<String, ServiceError> {
        let url = format!("{}/v1/recognize", self.config.endpoint);
        let content_type = format!("audio/l16;rate={}", audio.sample_rate);
        debug!(bytes = audio.pcm_data.len(), "recognize request");

        let response = self
            .client
            .post(&url)
            .basic_auth(
                &self.config.credentials.username,
                Some(&self.config.credentials.password),
            )
            .header("Content-Type", content_type)
            .body(audio.pcm_data.clone())
            .send()
            .await
            .map_err(|e| ServiceError::transport(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::from_body(SERVICE, status.as_u16(), &body));
        }

        let parsed: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::malformed(SERVICE, e.to_string()))?;

        best_transcript(parsed)
    }
}

fn best_transcript(response: RecognizeResponse) -> Result<String, ServiceError> {
    response
        .results
        .into_iter()
        .next()
        .and_then(|r| r.alternatives.into_iter().next())
        .map(|a| a.transcript)
        .ok_or_else(|| ServiceError::malformed(SERVICE, "no transcription results"))
}
