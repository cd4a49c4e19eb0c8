use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;

use super::state::TuiState;

pub enum TuiAction {
    /// Request a translation of the current input.
    Translate,
    /// Play the displayed translation.
    Speak,
    /// Cycle to the next target language.
    CycleLanguage,
    /// The input text was edited; the actor needs the new content.
    Edited,
    /// Quit the application.
    Quit,
    /// No action needed.
    None,
}

pub fn handle_key_event(
    key: KeyEvent,
    textarea: &mut TextArea,
    state: &mut TuiState,
) -> TuiAction {
    match (key.code, key.modifiers) {
        // Ctrl+C / Ctrl+D: quit
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => TuiAction::Quit,
        (KeyCode::Char('d'), m) if m.contains(KeyModifiers::CONTROL) => TuiAction::Quit,

        // Enter: translate the current input
        (KeyCode::Enter, KeyModifiers::NONE) => {
            if state.translate_enabled {
                TuiAction::Translate
            } else {
                TuiAction::None
            }
        }

        // Ctrl+P: play the translation
        (KeyCode::Char('p'), m) if m.contains(KeyModifiers::CONTROL) => {
            if state.play_enabled {
                TuiAction::Speak
            } else {
                TuiAction::None
            }
        }

        // Tab: cycle target language
        (KeyCode::Tab, _) => TuiAction::CycleLanguage,

        // Escape: clear input
        (KeyCode::Esc, _) => {
            *textarea = TextArea::default();
            configure_textarea(textarea);
            TuiAction::Edited
        }

        // All other keys: forward to textarea
        _ => {
            if textarea.input(key) {
                TuiAction::Edited
            } else {
                TuiAction::None
            }
        }
    }
}

/// The full input text as the actor should see it.
pub fn current_input(textarea: &TextArea) -> String {
    textarea.lines().join("\n")
}

pub fn configure_textarea(textarea: &mut TextArea) {
    textarea.set_placeholder_text("Type English text... (Enter to translate, Ctrl+P to play)");
    textarea.set_cursor_line_style(ratatui::style::Style::default());
    textarea.set_style(ratatui::style::Style::default().fg(ratatui::style::Color::White));
}
