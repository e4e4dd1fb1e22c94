// src/ui/widgets/footer.rs

use crate::app::{App, AppState};
use chrono::{Datelike, Local};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer: key hints for the focused view and the copyright line.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = match app.state {
        AppState::Idle => vec![
            key("[O]"),
            Span::raw("pen file, "),
            key("[X]"),
            Span::raw(" Remove, "),
            key("[Enter]"),
            Span::raw(" Upload, "),
            key("[Q]"),
            Span::raw("uit"),
        ],
        AppState::Picking => vec![
            key("↑ ↓"),
            Span::raw(" Move, "),
            key("[Enter]"),
            Span::raw(" Open/Choose, "),
            key("[Backspace]"),
            Span::raw(" Up, "),
            key("[Esc]"),
            Span::raw(" Cancel"),
        ],
    };

    spans.push(Span::styled(
        format!("   © {} Accessibility Analyzer", Local::now().year()),
        Style::default().fg(Color::DarkGray),
    ));

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
