//! Profile form rendering

use super::field_renderer::{draw_field, mask, FieldView};
use crate::app::App;
use crate::state::{FieldName, Focus, COUNTRY_PLACEHOLDER};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

/// Draw the profile form: the inputs that fit, then the submit button and help.
///
/// When the terminal is too short for every field, the form scrolls so the
/// focused field stays visible. Submit and help are always shown.
pub fn draw_profile_form(frame: &mut Frame, area: Rect, app: &App) {
    let field_width = area.width.saturating_sub(2);
    let views: Vec<FieldView> = FieldName::ALL
        .into_iter()
        .map(|field| field_view(app, field))
        .collect();
    let heights: Vec<u16> = views.iter().map(|view| view.height(field_width)).collect();

    let available = area.height.saturating_sub(2 + BUTTON_HEIGHT + 1);
    let focus_idx = match app.state.focus {
        Focus::Field(field) => field.index(),
        Focus::SubmitButton => FieldName::ALL.len() - 1,
    };
    let visible = visible_fields(&heights, focus_idx, available);

    let mut block = Block::default()
        .title(" Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    if visible.start > 0 {
        block = block.title_top(Line::from(" ▲ more ").right_aligned());
    }
    if visible.end < FieldName::ALL.len() {
        block = block.title_bottom(Line::from(" ▼ more ").right_aligned());
    }
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = heights[visible.clone()]
        .iter()
        .map(|height| Constraint::Length(*height))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Help text
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let shown = visible.len();
    for (chunk, (field, view)) in chunks.iter().zip(
        FieldName::ALL
            .into_iter()
            .zip(views)
            .skip(visible.start)
            .take(shown),
    ) {
        let is_active = app.state.focus == Focus::Field(field);
        draw_field(frame, *chunk, view, is_active);
    }

    let [_, button_area, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(16),
        Constraint::Fill(1),
    ])
    .areas(chunks[shown]);
    render_button(
        frame,
        button_area,
        "Submit",
        app.state.focus == Focus::SubmitButton,
        app.state.form.is_valid(),
        Color::Green,
    );

    draw_help_text(frame, chunks[shown + 1]);
}

/// Window of fields that fits in `available` rows and contains `focus`.
///
/// Scrolls only as far as needed: with room to spare the window starts at the
/// first field. The focused field is always included even if it overflows.
fn visible_fields(heights: &[u16], focus: usize, available: u16) -> Range<usize> {
    let rows = |range: Range<usize>| heights[range].iter().sum::<u16>();

    let mut start = 0;
    while start < focus && rows(start..focus + 1) > available {
        start += 1;
    }

    let mut end = focus + 1;
    while end < heights.len() && rows(start..end + 1) <= available {
        end += 1;
    }

    start..end
}

/// Build what a field displays from the current form state
fn field_view(app: &App, field: FieldName) -> FieldView<'_> {
    let values = app.state.form.values();
    let error = app.state.form.error_for(field);

    let (value, placeholder) = match field {
        FieldName::Password if !app.state.password_visible => {
            (non_empty(mask(&values.password)), "")
        }
        FieldName::Country => {
            let value = non_empty(values.country.clone()).map(|c| format!("◂ {c} ▸"));
            (value, COUNTRY_PLACEHOLDER)
        }
        FieldName::AgreeToTerms => {
            let mark = if values.agree_to_terms { "[x]" } else { "[ ]" };
            (Some(format!("{mark} I agree to the terms")), "")
        }
        other => (non_empty(values.display_value(other)), ""),
    };

    FieldView {
        label: field.label(),
        value,
        placeholder,
        error,
        editable: field.is_textual(),
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn draw_help_text(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(": country  "),
        Span::styled("Space", Style::default().fg(Color::Cyan)),
        Span::raw(": toggle  "),
        Span::styled(
            crate::platform::SUBMIT_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": submit  "),
        Span::styled(
            crate::platform::REVEAL_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": show password"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
