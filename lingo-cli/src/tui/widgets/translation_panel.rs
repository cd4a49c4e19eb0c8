use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::tui::state::{BannerData, TuiState};

pub fn render(frame: &mut Frame, area: Rect, state: &mut TuiState) {
    // Build all lines as owned data to avoid lifetime issues
    let mut lines: Vec<Line<'static>> = Vec::new();

    if let Some(ref banner) = state.banner_data {
        render_banner(&mut lines, banner, area.width);
    }

    if state.translated.is_empty() {
        lines.push(Line::from(Span::styled(
            "Translations will appear here.".to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", state.target.name()),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                state.translated.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_banner(lines: &mut Vec<Line<'static>>, banner: &BannerData, width: u16) {
    let box_width = (width as usize).max(40).saturating_sub(2);
    let border_style = Style::default().fg(Color::DarkGray);
    let border: String = "─".repeat(box_width);

    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();

    rows.push(vec![Span::styled(
        format!("Lingo v{}", banner.version),
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )]);
    rows.push(vec![]);
    rows.push(vec![
        Span::styled("Voice:    ".to_string(), Style::default().fg(Color::DarkGray)),
        Span::styled(banner.voice.clone(), Style::default().fg(Color::Cyan)),
    ]);
    rows.push(vec![
        Span::styled("Settings: ".to_string(), Style::default().fg(Color::DarkGray)),
        Span::styled(
            shorten_path(&banner.settings_path, box_width.saturating_sub(12)),
            Style::default().fg(Color::White),
        ),
    ]);
    rows.push(vec![]);
    rows.push(vec![
        Span::styled("Enter ".to_string(), Style::default().fg(Color::White)),
        Span::styled("translate  ".to_string(), Style::default().fg(Color::DarkGray)),
        Span::styled("Ctrl+P ".to_string(), Style::default().fg(Color::White)),
        Span::styled("play  ".to_string(), Style::default().fg(Color::DarkGray)),
        Span::styled("Tab ".to_string(), Style::default().fg(Color::White)),
        Span::styled("language  ".to_string(), Style::default().fg(Color::DarkGray)),
        Span::styled("Ctrl+C ".to_string(), Style::default().fg(Color::White)),
        Span::styled("quit".to_string(), Style::default().fg(Color::DarkGray)),
    ]);

    lines.push(Line::from(vec![
        Span::styled("╭".to_string(), border_style),
        Span::styled(border.clone(), border_style),
        Span::styled("╮".to_string(), border_style),
    ]));

    for row in rows {
        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("│".to_string(), border_style));
        spans.push(Span::raw(" ".to_string()));
        let content_used: usize = row.iter().map(|s| s.width()).sum();
        for span in row {
            spans.push(span);
        }
        let pad = box_width.saturating_sub(content_used + 1);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled("│".to_string(), border_style));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(vec![
        Span::styled("╰".to_string(), border_style),
        Span::styled(border, border_style),
        Span::styled("╯".to_string(), border_style),
    ]));

    // Blank line after the box before the translation
    lines.push(Line::from(""));
}

fn shorten_path(path: &str, max_len: usize) -> String {
    let home = std::env::var("HOME").unwrap_or_default();
    let path = if !home.is_empty() && path.starts_with(&home) {
        format!("~{}", &path[home.len()..])
    } else {
        path.to_string()
    };

    if path.len() <= max_len {
        path
    } else {
        format!("...{}", &path[path.len().saturating_sub(max_len - 3)..])
    }
}
