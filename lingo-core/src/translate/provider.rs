use async_trait::async_trait;

use super::types::{Language, Translation};
use crate::error::ServiceError;

/// Trait for translation services.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source` to `target`. Returns every candidate
    /// the service offered; callers display only the first.
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<Translation, ServiceError>;
}
