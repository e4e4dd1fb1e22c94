// src/ui/widgets/header.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub const TITLE: &str = "HTML Accessibility Analyzer";

pub fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(TITLE.bold()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}
