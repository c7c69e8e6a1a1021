//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod tooltips;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, status_area) = layout::create_layout(frame.area());

    forms::draw_profile_form(frame, form_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Success dialog overlays everything while the form is submitted
    if app.state.form.is_submitted() {
        components::render_success_dialog(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::{FieldName, Focus};
    use crate::validation::messages;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    fn new_app() -> App {
        App::new(&TuiConfig::default())
    }

    #[test]
    fn test_small_terminal_keeps_submit_and_focused_field() {
        let app = new_app();
        let rows = render(&app, 80, 24);
        assert!(screen_contains(&rows, "Full Name"));
        assert!(screen_contains(&rows, " Submit "));
        assert!(screen_contains(&rows, "▼ more"));
    }

    #[test]
    fn test_small_terminal_scrolls_to_focused_field() {
        let mut app = new_app();
        app.state.focus = Focus::SubmitButton;
        let rows = render(&app, 80, 24);
        assert!(screen_contains(&rows, "Agree to Terms"));
        assert!(screen_contains(&rows, "I agree to the terms"));
        assert!(screen_contains(&rows, "▲ more"));
        assert!(!screen_contains(&rows, "Full Name"));
        assert!(screen_contains(&rows, " Submit "));
    }

    #[test]
    fn test_typed_value_is_visible_in_small_terminal() {
        let mut app = new_app();
        app.state.focus = Focus::Field(FieldName::Email);
        app.state.form.apply_field_change(FieldName::Email, "a@b.co");
        let rows = render(&app, 80, 24);
        assert!(screen_contains(&rows, "a@b.co"));
    }

    #[test]
    fn test_long_error_is_shown_in_full() {
        let mut app = new_app();
        app.state.form.apply_field_change(FieldName::Password, "abc");
        let rows = render(&app, 120, 40);
        assert!(screen_contains(&rows, "include a number,"));
        assert!(screen_contains(&rows, "and a special character."));
        assert!(screen_contains(&rows, "•••"));
    }

    #[test]
    fn test_every_error_reachable_after_rejected_submit() {
        let mut app = new_app();
        app.state.form.attempt_submit();
        for field in FieldName::ALL {
            app.state.focus = Focus::Field(field);
            let rows = render(&app, 80, 24);
            assert!(screen_contains(&rows, field.label()), "{field} not shown");
            assert!(screen_contains(&rows, " Submit "));
        }
        app.state.focus = Focus::Field(FieldName::Age);
        let rows = render(&app, 80, 24);
        assert!(screen_contains(&rows, messages::AGE));
    }

    #[test]
    fn test_success_dialog_overlays_form() {
        let mut app = new_app();
        app.state.form.apply_field_change(FieldName::FullName, "John Doe");
        app.state.form.apply_field_change(FieldName::Email, "a@b.co");
        app.state.form.apply_field_change(FieldName::Password, "Abcdef1!");
        app.state.form.apply_field_change(FieldName::PhoneNumber, "1234567890");
        app.state.form.apply_field_change(FieldName::Age, "30");
        app.state.form.apply_field_change(FieldName::Country, "USA");
        app.state.form.apply_field_change(FieldName::AgreeToTerms, true);
        assert!(app.state.form.attempt_submit().succeeded());

        let rows = render(&app, 80, 24);
        assert!(screen_contains(&rows, "Form Submitted Successfully!"));
        assert!(screen_contains(&rows, "Thank you for your submission."));
    }
}
