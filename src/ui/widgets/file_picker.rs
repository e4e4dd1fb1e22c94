// src/ui/widgets/file_picker.rs

use crate::core::file_picker::{EntryKind, FilePicker};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

/// Renders the file browser popup on top of the existing UI.
///
/// The popup shows the current directory in its title, an optional error
/// line when the directory could not be read, and the entries the browser
/// offers (parent, sub-directories, HTML files). `Clear` wipes the popup
/// area first so the page underneath does not bleed through.
///
/// # Arguments
/// * `frame` - The frame to draw on.
/// * `picker` - Browser state; its `ListState` tracks the highlighted entry.
/// * `area` - The full screen area the popup is centered in.
pub fn render_file_picker(frame: &mut Frame, picker: &mut FilePicker, area: Rect) {
    let block = Block::default()
        .title(format!("Choose an HTML file: {}", picker.dir().display()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let popup_area = centered_rect(70, 70, area);
    frame.render_widget(Clear, popup_area);

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if picker.error().is_some() { 1 } else { 0 }),
            Constraint::Min(0),
        ])
        .split(inner_area);

    if let Some(error) = picker.error() {
        let line = Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red));
        frame.render_widget(line, chunks[0]);
    }

    let items: Vec<ListItem> = picker
        .entries()
        .iter()
        .map(|entry| {
            let line = match entry.kind {
                EntryKind::Parent => Line::from(Span::styled("../", Style::default().fg(Color::DarkGray))),
                EntryKind::Directory => Line::from(Span::styled(format!("{}/", entry.name), Style::default().fg(Color::Blue))),
                EntryKind::File => Line::from(entry.name.clone()),
            };
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, chunks[1], &mut picker.list_state);
}

/// Centered rectangle taking the given share of `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
