// src/ui/mod.rs

use crate::app::{App, AppState};
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let layout = layout::create_layout(area, app.page.error().is_some());

    widgets::header::render_header(frame, layout.header);
    widgets::upload_form::render_upload_form(frame, app, layout.form);

    if let Some(message) = app.page.error() {
        widgets::error_banner::render_error_banner(frame, message, layout.banner);
    }

    widgets::results::render_results(frame, app, layout.results);
    widgets::footer::render_footer(frame, app, layout.footer);

    // The browser is modal and drawn last so it covers everything else.
    if let (AppState::Picking, Some(picker)) = (&app.state, app.picker.as_mut()) {
        widgets::file_picker::render_file_picker(frame, picker, area);
    }
}
