//! Field rendering utilities for forms

use crate::ui::components::wrap_text;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one rendered field without an error (borders included)
const FIELD_HEIGHT: u16 = 3;

/// What a field shows inside its borders
pub struct FieldView<'a> {
    pub label: &'a str,
    /// Text to render; `None` shows the placeholder
    pub value: Option<String>,
    pub placeholder: &'a str,
    /// Validation message drawn in red below the value
    pub error: Option<&'a str>,
    /// Whether typed text is appended (draws a cursor when active)
    pub editable: bool,
}

impl FieldView<'_> {
    /// Error message wrapped to the inner width of a field `width` columns wide
    fn error_lines(&self, width: u16) -> Vec<String> {
        let inner = width.saturating_sub(2).max(1) as usize;
        self.error
            .map(|error| wrap_text(error, inner))
            .unwrap_or_default()
    }

    /// Rows needed to show the value and the whole error message
    pub fn height(&self, width: u16) -> u16 {
        FIELD_HEIGHT + self.error_lines(width).len() as u16
    }
}

/// Draw a form field: value row, then its error wrapped onto extra rows
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView, is_active: bool) {
    let border_style = match (field.error.is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let title_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let error_lines = field.error_lines(area.width);

    let mut spans = match field.value {
        Some(value) => vec![Span::styled(value, Style::default().fg(Color::White))],
        None if is_active && field.editable => Vec::new(),
        None => vec![Span::styled(
            field.placeholder,
            Style::default().fg(Color::DarkGray),
        )],
    };
    if is_active && field.editable {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let mut lines = vec![Line::from(spans)];
    lines.extend(
        error_lines
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Red)))),
    );

    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.label), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Mask a secret for display
pub fn mask(value: &str) -> String {
    "•".repeat(value.chars().count())
}
