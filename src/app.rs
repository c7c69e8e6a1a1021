//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, FieldName, FieldValue, Focus, FormPhase, SubmitOutcome};
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from the user's configuration
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            state: AppState::new(config.countries(), !config.mask_password()),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Success dialog is modal
        if self.state.form.phase() == FormPhase::Submitted {
            self.handle_confirmation_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
                return Ok(());
            }
            KeyCode::Char('r') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.state.password_visible = !self.state.password_visible;
                return Ok(());
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.next_focus();
                return Ok(());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.prev_focus();
                return Ok(());
            }
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            _ => {}
        }

        match self.state.focus {
            Focus::Field(FieldName::Country) => self.handle_country_key(key),
            Focus::Field(FieldName::AgreeToTerms) => self.handle_terms_key(key),
            Focus::Field(field) => self.handle_text_key(field, key),
            Focus::SubmitButton => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit();
                }
            }
        }

        Ok(())
    }

    /// Keys for the free-text inputs
    fn handle_text_key(&mut self, field: FieldName, key: KeyEvent) {
        let current = self.state.form.values().display_value(field);
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut value = current;
                value.push(c);
                self.state.form.apply_field_change(field, value);
            }
            KeyCode::Backspace => {
                let mut value = current;
                if value.pop().is_some() {
                    self.state.form.apply_field_change(field, value);
                }
            }
            KeyCode::Enter => self.state.next_focus(),
            _ => {}
        }
    }

    /// Keys for the country select
    fn handle_country_key(&mut self, key: KeyEvent) {
        let forward = match key.code {
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => true,
            KeyCode::Left | KeyCode::Char('h') => false,
            KeyCode::Enter => {
                self.state.next_focus();
                return;
            }
            _ => return,
        };
        let next = self
            .state
            .cycle_country(&self.state.form.values().country, forward);
        self.state.form.apply_field_change(FieldName::Country, next);
    }

    /// Keys for the terms checkbox
    fn handle_terms_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            let checked = !self.state.form.values().agree_to_terms;
            self.state
                .form
                .apply_field_change(FieldName::AgreeToTerms, FieldValue::Bool(checked));
        }
    }

    /// Keys while the success dialog is showing
    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.state.form.dismiss_confirmation();
                self.state.status_message = None;
            }
            KeyCode::Char('c') => match self.copy_submission() {
                Ok(()) => {
                    self.state.status_message = Some("Submission copied to clipboard".to_string())
                }
                Err(err) => {
                    tracing::warn!("Clipboard copy failed: {err:#}");
                    self.state.status_message = Some(format!("Copy failed: {err}"));
                }
            },
            _ => {}
        }
    }

    /// Run a submit attempt and reflect its outcome in the UI
    fn submit(&mut self) {
        match self.state.form.attempt_submit() {
            SubmitOutcome::Accepted(_) => {
                self.state.status_message = None;
            }
            SubmitOutcome::Rejected { error_count } => {
                let noun = if error_count == 1 { "field needs" } else { "fields need" };
                self.state.status_message = Some(format!("{error_count} {noun} attention"));
                if let Some(first) = self.state.form.errors().fields().next() {
                    self.state.focus = Focus::Field(first);
                }
            }
        }
    }

    fn copy_submission(&self) -> Result<()> {
        let submission = self
            .state
            .form
            .last_submission()
            .context("No submission to copy")?;
        let json = submission.to_json()?;
        self.copy_to_clipboard(&json)
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AgeValue;
    use crate::validation::messages;
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn new_app() -> App {
        App::new(&TuiConfig::default())
    }

    /// Fill every field through key events, leaving focus on the submit button
    fn fill_valid(app: &mut App) {
        type_text(app, "John Doe");
        press(app, KeyCode::Tab);
        type_text(app, "a@b.co");
        press(app, KeyCode::Tab);
        type_text(app, "Abcdef1!");
        press(app, KeyCode::Tab);
        type_text(app, "1234567890");
        press(app, KeyCode::Tab);
        type_text(app, "30");
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right);
        press(app, KeyCode::Tab);
        press(app, KeyCode::Char(' '));
        press(app, KeyCode::Tab);
    }

    mod text_input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_updates_value_and_error() {
            let mut app = new_app();
            type_text(&mut app, "Jo");
            assert_eq!(app.state.form.values().full_name, "Jo");
            assert_eq!(
                app.state.form.error_for(FieldName::FullName),
                Some(messages::FULL_NAME)
            );
            press(&mut app, KeyCode::Char('e'));
            assert_eq!(app.state.form.error_for(FieldName::FullName), None);
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut app = new_app();
            type_text(&mut app, "Joe");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.state.form.values().full_name, "Jo");
        }

        #[test]
        fn test_backspace_on_empty_does_not_surface_error() {
            let mut app = new_app();
            press(&mut app, KeyCode::Backspace);
            assert!(app.state.form.errors().is_empty());
        }

        #[test]
        fn test_control_chars_are_not_typed() {
            let mut app = new_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL))
                .unwrap();
            assert_eq!(app.state.form.values().full_name, "");
        }

        #[test]
        fn test_age_is_stored_as_text() {
            let mut app = new_app();
            app.state.focus = Focus::Field(FieldName::Age);
            type_text(&mut app, "18");
            assert_eq!(app.state.form.values().age, AgeValue::Text("18".into()));
            assert_eq!(app.state.form.error_for(FieldName::Age), None);
        }

        #[test]
        fn test_enter_moves_to_next_field() {
            let mut app = new_app();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.focus, Focus::Field(FieldName::Email));
        }
    }

    mod select_and_checkbox {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_country_cycles_through_options() {
            let mut app = new_app();
            app.state.focus = Focus::Field(FieldName::Country);
            press(&mut app, KeyCode::Right);
            assert_eq!(app.state.form.values().country, "Jordan");
            press(&mut app, KeyCode::Left);
            assert_eq!(app.state.form.values().country, "");
            assert_eq!(
                app.state.form.error_for(FieldName::Country),
                Some(messages::COUNTRY)
            );
        }

        #[test]
        fn test_terms_toggle() {
            let mut app = new_app();
            app.state.focus = Focus::Field(FieldName::AgreeToTerms);
            press(&mut app, KeyCode::Char(' '));
            assert!(app.state.form.values().agree_to_terms);
            press(&mut app, KeyCode::Enter);
            assert!(!app.state.form.values().agree_to_terms);
            assert_eq!(
                app.state.form.error_for(FieldName::AgreeToTerms),
                Some(messages::AGREE_TO_TERMS)
            );
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_filled_form_is_valid_and_submits() {
            let mut app = new_app();
            fill_valid(&mut app);
            assert_eq!(app.state.focus, Focus::SubmitButton);
            assert!(app.state.form.is_valid());

            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.form.phase(), FormPhase::Submitted);
            assert!(app.state.form.last_submission().is_some());
        }

        #[test]
        fn test_premature_submit_focuses_first_error() {
            let mut app = new_app();
            type_text(&mut app, "John Doe");
            ctrl(&mut app, 's');
            assert_eq!(app.state.form.phase(), FormPhase::Editing);
            assert_eq!(app.state.form.errors().len(), 6);
            assert_eq!(app.state.focus, Focus::Field(FieldName::Email));
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("6 fields need attention")
            );
        }

        #[test]
        fn test_single_error_message_is_singular() {
            let mut app = new_app();
            fill_valid(&mut app);
            app.state.focus = Focus::Field(FieldName::FullName);
            press(&mut app, KeyCode::Backspace);
            press(&mut app, KeyCode::Backspace);
            press(&mut app, KeyCode::Backspace);
            press(&mut app, KeyCode::Backspace);
            press(&mut app, KeyCode::Backspace);
            press(&mut app, KeyCode::Backspace);
            ctrl(&mut app, 's');
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("1 field needs attention")
            );
        }

        #[test]
        fn test_dialog_swallows_keys_until_dismissed() {
            let mut app = new_app();
            fill_valid(&mut app);
            press(&mut app, KeyCode::Enter);

            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.focus, Focus::SubmitButton);
            assert!(!app.should_quit());

            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.form.phase(), FormPhase::Editing);
            assert_eq!(app.state.form.values().full_name, "John Doe");
            assert!(!app.should_quit());
        }
    }

    #[test]
    fn test_tab_and_backtab_move_focus() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state.focus, Focus::Field(FieldName::Email));
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.state.focus, Focus::SubmitButton);
    }

    #[test]
    fn test_reveal_toggles_password_visibility() {
        let mut app = new_app();
        assert!(!app.state.password_visible);
        app.handle_key(KeyEvent::new(
            KeyCode::Char('r'),
            crate::platform::COPY_MODIFIER,
        ))
        .unwrap();
        assert!(app.state.password_visible);
    }

    #[test]
    fn test_esc_quits_while_editing() {
        let mut app = new_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_unmasked_config() {
        let config = TuiConfig {
            mask_password: Some(false),
            ..Default::default()
        };
        assert!(App::new(&config).state.password_visible);
    }
}
