// src/ui/widgets/error_banner.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the active error as an alert. Only called while an error is active.
pub fn render_error_banner(frame: &mut Frame, message: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(Span::styled(" Alert ", Style::default().fg(Color::Red).bold()));

    let banner = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::LightRed))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(banner, area);
}
