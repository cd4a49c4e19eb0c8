use lingo_core::ScreenEvent;

use super::state::TuiState;

pub fn handle_screen_event(state: &mut TuiState, event: ScreenEvent) {
    match event {
        ScreenEvent::TranslationUpdated(text) => {
            state.translated = text;
        }

        ScreenEvent::TranslateEnabled(enabled) => {
            state.translate_enabled = enabled;
        }

        ScreenEvent::PlayEnabled(enabled) => {
            state.play_enabled = enabled;
        }

        ScreenEvent::TargetLanguageChanged(language) => {
            state.target = language;
        }

        ScreenEvent::BusyChanged(busy) => {
            state.busy = busy;
        }

        ScreenEvent::Notice(notice) => {
            // The screen shows one transient notice at a time.
            state.notice = Some(notice);
        }
    }
}
