// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas, computed once per frame.
pub struct AppLayout {
    pub header: Rect,
    pub form: Rect,
    /// Zero-sized when no error is shown.
    pub banner: Rect,
    pub results: Rect,
    pub footer: Rect,
}

/// Splits the frame top to bottom: title, upload form, optional error
/// banner, results panel, footer. The banner takes space only while an
/// error is active so the results move down instead of being covered.
pub fn create_layout(frame_size: Rect, show_banner: bool) -> AppLayout {
    let banner_height = if show_banner { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(banner_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    AppLayout {
        header: chunks[0],
        form: chunks[1],
        banner: chunks[2],
        results: chunks[3],
        footer: chunks[4],
    }
}
