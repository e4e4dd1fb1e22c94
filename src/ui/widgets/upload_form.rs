// src/ui/widgets/upload_form.rs

use crate::app::{App, SPINNER_CHARS};
use crate::core::upload_form::UploadForm;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub const LABEL: &str = "Select an HTML file to analyze:";
pub const SUBMIT_LABEL: &str = "Upload and Analyze";
pub const IN_FLIGHT_LABEL: &str = "Analyzing...";

/// Renders the label, the chosen file with its remove affordance, and the submit control.
pub fn render_upload_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("File Upload ({})", app.upload_url));

    let selection_line = match app.form.selected() {
        Some(file) => Line::from(vec![
            Span::styled(file.name.clone(), Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled("[X] Remove", Style::default().fg(Color::Red)),
        ]),
        None => Line::from(Span::styled(
            "No file chosen. Press O to browse.",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let text = vec![
        Line::from(LABEL.bold()),
        selection_line,
        submit_control(&app.form, app.spinner_frame),
    ];

    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// The submit "button". Drawn dimmed whenever pressing it would do nothing.
fn submit_control(form: &UploadForm, spinner_frame: usize) -> Line<'static> {
    let label = if form.in_flight() {
        format!(" {} {} ", SPINNER_CHARS[spinner_frame % SPINNER_CHARS.len()], IN_FLIGHT_LABEL)
    } else {
        format!(" {} ", SUBMIT_LABEL)
    };

    let style = if form.can_submit() {
        Style::default().fg(Color::White).bg(Color::Blue).bold()
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    };

    Line::from(vec![
        Span::styled(label, style),
        Span::styled("  (Enter)", Style::default().fg(Color::DarkGray)),
    ])
}
