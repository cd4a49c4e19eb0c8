pub mod mock;
pub mod provider;
pub mod types;
pub mod watson;

pub use provider::Translator;
pub use types::{Language, Translation};
