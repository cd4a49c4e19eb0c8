//! Watson Language Translation v2 client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::provider::Translator;
use super::types::{Language, Translation};
use crate::error::ServiceError;
use crate::settings::Credentials;

const SERVICE: &str = "translation";
const DEFAULT_ENDPOINT: &str = "https://gateway.watsonplatform.net/language-translation/api";
const TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct WatsonTranslatorConfig {
    pub credentials: Credentials,
    pub endpoint: String,
}

impl WatsonTranslatorConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

pub struct WatsonTranslator {
    client: Client,
    config: WatsonTranslatorConfig,
}

impl WatsonTranslator {
    pub fn new(config: WatsonTranslatorConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: Vec<&'a str>,
    source: &'static str,
    target: &'static str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    translations: Vec<TranslationItem>,
}

#[derive(Deserialize)]
struct TranslationItem {
    translation: String,
}

#[async_trait]
impl Translator for WatsonTranslator {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<Translation, ServiceError> {
        let url = format!("{}/v2/translate", self.config.endpoint);
        debug!(source = source.code(), target = target.code(), "translate request");

        let request_body = TranslateRequest {
            text: vec![text],
            source: source.code(),
            target: target.code(),
        };

        let response = self
            .client
            .post(&url)
            .basic_auth(
                &self.config.credentials.username,
                Some(&self.config.credentials.password),
            )
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ServiceError::transport(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::from_body(SERVICE, status.as_u16(), &body));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::malformed(SERVICE, e.to_string()))?;

        into_translation(parsed)
    }
}

fn into_translation(response: TranslateResponse) -> Result<Translation, ServiceError> {
    if response.translations.is_empty() {
        return Err(ServiceError::malformed(SERVICE, "empty translation list"));
    }

    Ok(Translation::new(
        response
            .translations
            .into_iter()
            .map(|t| t.translation)
            .collect(),
    ))
}
