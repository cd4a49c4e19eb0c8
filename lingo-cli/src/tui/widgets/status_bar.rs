use lingo_core::NoticeLevel;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::state::TuiState;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let status = if state.busy {
        let spinner = SPINNER_CHARS[state.spinner_frame % SPINNER_CHARS.len()];
        format!("{spinner} Working...")
    } else {
        "Ready".to_string()
    };

    let sep = Span::styled(" | ", Style::default().fg(Color::DarkGray));

    let mut parts: Vec<Span<'static>> = vec![
        Span::styled(" ", Style::default()),
        Span::styled(
            state.target.name().to_string(),
            Style::default().fg(Color::Yellow),
        ),
        sep.clone(),
        Span::styled(status, Style::default().fg(Color::Green)),
    ];

    if let Some(ref notice) = state.notice {
        let color = match notice.level {
            NoticeLevel::Info => Color::White,
            NoticeLevel::Error => Color::Red,
        };
        parts.push(sep);
        parts.push(Span::styled(
            notice.message.clone(),
            Style::default().fg(color),
        ));
    }

    let bar = Paragraph::new(Line::from(parts)).style(Style::default().bg(Color::Rgb(30, 30, 30)));

    frame.render_widget(bar, area);
}
