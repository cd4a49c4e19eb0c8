pub mod stt;
pub mod tts;
pub mod types;

pub use stt::Transcriber;
pub use tts::Synthesizer;
pub use types::{AudioData, Voice};
