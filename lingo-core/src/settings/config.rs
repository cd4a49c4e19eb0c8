use serde::{Deserialize, Serialize};

use crate::translate::types::Language;

/// Username/password pair for one cloud service.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    pub fn is_configured(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Per-service settings: credentials plus an optional endpoint override
/// for testing against a local stand-in.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ServiceSettings {
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default)]
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub translation: ServiceSettings,

    #[serde(default)]
    pub text_to_speech: ServiceSettings,

    #[serde(default)]
    pub speech_to_text: ServiceSettings,

    /// The target language selected at startup.
    #[serde(default = "default_target_language")]
    pub target_language: Language,

    /// Vendor voice id used for every synthesis request.
    #[serde(default = "default_voice")]
    pub voice: String,
}

fn default_target_language() -> Language {
    Language::Spanish
}

fn default_voice() -> String {
    "en-US_LisaVoice".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            translation: ServiceSettings::default(),
            text_to_speech: ServiceSettings::default(),
            speech_to_text: ServiceSettings::default(),
            target_language: default_target_language(),
            voice: default_voice(),
        }
    }
}
