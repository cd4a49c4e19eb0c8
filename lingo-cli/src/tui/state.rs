use lingo_core::{Language, Notice};

/// Data for the startup banner displayed in the translation panel.
pub struct BannerData {
    pub version: String,
    pub voice: String,
    pub settings_path: String,
}

pub struct TuiState {
    /// The currently displayed translation (empty until the first result).
    pub translated: String,

    /// The held target language for the next translation.
    pub target: Language,

    /// Whether the translate action is available (input non-empty).
    pub translate_enabled: bool,

    /// Whether the play action is available (translation non-empty).
    pub play_enabled: bool,

    /// Whether any background task is in flight.
    pub busy: bool,

    /// Spinner animation frame counter.
    pub spinner_frame: usize,

    /// The most recent transient notification, replaced on each new one.
    pub notice: Option<Notice>,

    /// Banner info for initial display.
    pub banner_data: Option<BannerData>,

    /// Whether the app should exit.
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(target: Language, banner_data: Option<BannerData>) -> Self {
        Self {
            translated: String::new(),
            target,
            translate_enabled: false,
            play_enabled: false,
            busy: false,
            spinner_frame: 0,
            notice: None,
            banner_data,
            should_quit: false,
        }
    }
}
