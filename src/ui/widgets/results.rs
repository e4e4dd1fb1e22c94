// src/ui/widgets/results.rs

use crate::app::App;
use crate::core::models::{AnalysisResult, ScoreStatus};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
};

pub const EMPTY_STATE: &str = "No accessibility issues found. Great job!";

/// Renders the results panel, or a hint while there is no active result.
pub fn render_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(result) = app.page.result() else {
        let hint = Paragraph::new("Analysis results will appear here.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(hint, area);
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Analysis Results (scroll with ↑ ↓)");
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // The rightmost column belongs to the scrollbar.
    let text_area = Rect { width: inner_area.width.saturating_sub(1), ..inner_area };
    let report = Paragraph::new(results_text(result)).wrap(Wrap { trim: false });

    // Offsets are in wrapped screen rows, not logical lines.
    let rows = report.line_count(text_area.width);
    let max_offset = rows.saturating_sub(text_area.height as usize);
    app.scroll_offset = app.scroll_offset.min(max_offset);
    app.report_scroll_state = app
        .report_scroll_state
        .content_length(max_offset + 1)
        .position(app.scroll_offset);

    let scroll = u16::try_from(app.scroll_offset).unwrap_or(u16::MAX);
    frame.render_widget(report.scroll((scroll, 0)), text_area);

    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        inner_area,
        &mut app.report_scroll_state,
    );
}

/// Builds the panel body: score, issue count, then the issues or the empty state.
pub fn results_text(result: &AnalysisResult) -> Text<'static> {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Compliance Score: "),
            Span::styled(result.compliance_score.to_string(), score_style(result.score_status())),
        ]),
        Line::from(vec![
            Span::raw("Issues Identified: "),
            Span::styled(result.issues.len().to_string(), Style::default().bold()),
        ]),
        Line::from(""),
    ];

    if result.issues.is_empty() {
        lines.push(Line::from(Span::styled(EMPTY_STATE, Style::default().fg(Color::Green))));
        return Text::from(lines);
    }

    for (index, issue) in result.issues.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", index + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(issue.issue.clone(), Style::default().bold()),
        ]));
        lines.push(Line::from(issue.description.clone()));
        lines.push(Line::from(Span::styled(
            format!("Suggestion: {}", issue.suggestion),
            Style::default().italic(),
        )));
        lines.push(Line::from(""));
    }

    Text::from(lines)
}
