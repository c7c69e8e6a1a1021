//! Submission confirmation dialog

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the success notice centered on the screen
pub fn render_success_dialog(frame: &mut Frame) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::raw(" close  "),
        Span::styled("c", key_style),
        Span::raw(" copy submission"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Form Submitted Successfully!",
            title_color: Color::Green,
            border_color: Color::Green,
            message: "Thank you for your submission.",
            hint: Some(hint),
            max_width: 50,
        },
    );
}
