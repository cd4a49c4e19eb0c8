use serde::{Deserialize, Serialize};

/// Raw audio as produced by synthesis and consumed by transcription:
/// signed 16-bit little-endian PCM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioData {
    pub pcm_data: Vec<u8>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioData {
    /// 16 kHz mono, the format both Watson speech services use here.
    pub fn pcm_16k_mono(pcm_data: Vec<u8>) -> Self {
        Self {
            pcm_data,
            sample_rate: 16_000,
            channels: 1,
        }
    }
}

/// Voice selection for speech synthesis. The id is vendor-defined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voice {
    pub id: String,
    pub name: String,
    pub language_code: String,
}

impl Voice {
    /// The fixed voice the screen uses for playback, matching the
    /// service's US English "Lisa" voice.
    pub fn lisa() -> Self {
        Self {
            id: "en-US_LisaVoice".to_string(),
            name: "Lisa".to_string(),
            language_code: "en-US".to_string(),
        }
    }

    /// A voice known only by its vendor id.
    pub fn from_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            language_code: "en-US".to_string(),
            id,
        }
    }
}
