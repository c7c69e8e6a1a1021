//! Layout components (form column, status bar)

use crate::app::App;
use crate::state::Focus;
use crate::ui::tooltips::tooltip;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Maximum width of the form column
const FORM_WIDTH: u16 = 64;

/// Split the screen into a centered form column and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let [form_area] = Layout::horizontal([Constraint::Max(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(chunks[0]);

    (form_area, chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let mut spans = Vec::new();

    if let Some(msg) = &state.status_message {
        let color = if state.form.is_submitted() {
            Color::Green
        } else {
            Color::Yellow
        };
        spans.push(Span::styled(format!(" {msg}"), Style::default().fg(color)));
    } else if let Focus::Field(field) = state.focus {
        spans.push(Span::styled(
            format!(" {}", tooltip(field)),
            Style::default().fg(Color::White),
        ));
    } else if state.form.is_valid() {
        spans.push(Span::styled(
            " Ready to submit",
            Style::default().fg(Color::Green),
        ));
    } else {
        spans.push(Span::styled(
            " Complete every field to enable submit",
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
