use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

use crate::translate::types::Language;

/// `ScreenEvent` are the messages sent from the screen actor - its output.
///
/// The actor is built with 2 channels - an input and output channel.
/// Requests are sent to the actor through the input channel and may
/// generate one or more `ScreenEvent`s in response. UI applications
/// render these events; they hold no application logic of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum ScreenEvent {
    /// The displayed translation changed. Always a complete value,
    /// never a partial or merged one.
    TranslationUpdated(String),

    /// The translate control crossed the empty/non-empty edge.
    TranslateEnabled(bool),

    /// The play control crossed the empty/non-empty edge.
    PlayEnabled(bool),

    /// The held target language changed.
    TargetLanguageChanged(Language),

    /// A background task started or finished.
    BusyChanged(bool),

    /// A transient user-facing notification (the toast of the screen).
    Notice(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub timestamp: u64,
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: String) -> Self {
        Self {
            timestamp: Utc::now().timestamp_millis() as u64,
            level: NoticeLevel::Info,
            message,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            timestamp: Utc::now().timestamp_millis() as u64,
            level: NoticeLevel::Error,
            message,
        }
    }
}

/// A small wrapper over the `event_tx` for convenience. Keeps a history
/// of everything sent so tests can assert over the full event stream.
#[derive(Clone)]
pub struct EventSender {
    event_tx: mpsc::UnboundedSender<ScreenEvent>,
    event_history: Arc<Mutex<Vec<ScreenEvent>>>,
}

impl EventSender {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ScreenEvent>) {
        let (event_tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                event_tx,
                event_history: Arc::new(Mutex::new(Vec::new())),
            },
            rx,
        )
    }

    pub fn send(&self, event: ScreenEvent) {
        self.event_history.lock().unwrap().push(event.clone());
        let _ = self.event_tx.send(event);
    }

    pub fn notice(&self, notice: Notice) {
        self.send(ScreenEvent::Notice(notice));
    }

    pub fn set_busy(&self, busy: bool) {
        self.send(ScreenEvent::BusyChanged(busy));
    }

    pub fn event_history(&self) -> Vec<ScreenEvent> {
        self.event_history.lock().unwrap().clone()
    }
}
