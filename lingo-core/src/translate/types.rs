use serde::{Deserialize, Serialize};

/// The languages the screen knows about. English is the fixed source;
/// the other three are the selectable targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Spanish,
    French,
    Italian,
}

impl Language {
    /// Targets the user can select, in cycle order.
    pub const TARGETS: [Language; 3] = [Language::Spanish, Language::French, Language::Italian];

    /// The code the translation service expects.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Italian => "it",
        }
    }

    /// Human-readable name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Italian => "Italian",
        }
    }

    /// The next selectable target after this one. English (the source)
    /// cycles into the first target.
    pub fn next_target(self) -> Language {
        match self {
            Language::Spanish => Language::French,
            Language::French => Language::Italian,
            Language::Italian | Language::English => Language::Spanish,
        }
    }
}

/// A translation response. Services may return several candidates; only
/// the first is ever shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub candidates: Vec<String>,
}

impl Translation {
    pub fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }

    /// The first candidate, if the service returned any.
    pub fn first(&self) -> Option<&str> {
        self.candidates.first().map(String::as_str)
    }
}
