pub mod mock;
pub mod provider;
pub mod watson;

pub use provider::Synthesizer;
