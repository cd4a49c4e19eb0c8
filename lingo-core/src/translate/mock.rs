use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::provider::Translator;
use super::types::{Language, Translation};
use crate::error::ServiceError;

/// Mock behavior for the mock translator
#[derive(Debug, Clone, Default)]
pub enum MockTranslateBehavior {
    /// Translate to "<target code>:<text>", plus a decoy second candidate
    /// so tests can verify only the first is ever displayed.
    #[default]
    Echo,
    /// Echo after a delay (for ordering tests).
    EchoAfter { delay_ms: u64 },
    /// Return a fixed candidate list regardless of input.
    Fixed { candidates: Vec<String> },
    /// Always fail with an opaque service error.
    AlwaysError,
    /// Pop one behavior per call, in order. Empty queue falls back to Echo.
    Queue { behaviors: Vec<MockTranslateBehavior> },
}

#[derive(Debug, Clone)]
pub struct CapturedTranslateRequest {
    pub text: String,
    pub source: Language,
    pub target: Language,
}

/// Mock translation service for testing
#[derive(Clone, Default)]
pub struct MockTranslator {
    behavior: Arc<Mutex<MockTranslateBehavior>>,
    captured_requests: Arc<Mutex<Vec<CapturedTranslateRequest>>>,
}

impl MockTranslator {
    pub fn new(behavior: MockTranslateBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.captured_requests.lock().unwrap().len()
    }

    pub fn last_captured_request(&self) -> Option<CapturedTranslateRequest> {
        self.captured_requests.lock().unwrap().last().cloned()
    }

    /// The candidate list `Echo` produces for the given input.
    pub fn echo_candidates(text: &str, target: Language) -> Vec<String> {
        vec![
            format!("{}:{}", target.code(), text),
            format!("{}:{} (alternate)", target.code(), text),
        ]
    }

    fn pop_behavior(behavior: &mut MockTranslateBehavior) -> MockTranslateBehavior {
        if let MockTranslateBehavior::Queue { behaviors } = behavior {
            if behaviors.is_empty() {
                return MockTranslateBehavior::Echo;
            }
            return behaviors.remove(0);
        }
        behavior.clone()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<Translation, ServiceError> {
        self.captured_requests
            .lock()
            .unwrap()
            .push(CapturedTranslateRequest {
                text: text.to_string(),
                source,
                target,
            });

        let effective = {
            let mut behavior = self.behavior.lock().unwrap();
            Self::pop_behavior(&mut behavior)
        };

        match effective {
            MockTranslateBehavior::Echo => {
                Ok(Translation::new(Self::echo_candidates(text, target)))
            }
            MockTranslateBehavior::EchoAfter { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Ok(Translation::new(Self::echo_candidates(text, target)))
            }
            MockTranslateBehavior::Fixed { candidates } => Ok(Translation::new(candidates)),
            MockTranslateBehavior::AlwaysError => Err(ServiceError::malformed(
                "translation",
                "mock translation error",
            )),
            MockTranslateBehavior::Queue { .. } => {
                panic!("Bug: nested Queue detected. Test setup error - queues cannot contain queues")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echo_reports_target_and_decoy() {
        let translator = MockTranslator::default();

        let translation = translator
            .translate("hello", Language::English, Language::Spanish)
            .await
            .unwrap();

        assert_eq!(translation.first(), Some("es:hello"));
        assert_eq!(translation.candidates.len(), 2);
        assert_eq!(translator.call_count(), 1);
    }

    #[tokio::test]
    async fn queue_pops_in_order_then_falls_back() {
        let translator = MockTranslator::new(MockTranslateBehavior::Queue {
            behaviors: vec![
                MockTranslateBehavior::AlwaysError,
                MockTranslateBehavior::Fixed {
                    candidates: vec!["bonjour".to_string()],
                },
            ],
        });

        let first = translator
            .translate("hello", Language::English, Language::French)
            .await;
        assert!(first.is_err());

        let second = translator
            .translate("hello", Language::English, Language::French)
            .await
            .unwrap();
        assert_eq!(second.first(), Some("bonjour"));

        let third = translator
            .translate("hi", Language::English, Language::French)
            .await
            .unwrap();
        assert_eq!(third.first(), Some("fr:hi"));
    }
}
