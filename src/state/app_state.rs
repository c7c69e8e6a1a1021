//! Application state definitions

use super::forms::{FieldName, ProfileForm};

/// Placeholder entry shown before a country is chosen
pub const COUNTRY_PLACEHOLDER: &str = "Select a country";

/// Countries offered when the config does not list any
pub const DEFAULT_COUNTRIES: &[&str] = &["Jordan", "USA", "Canada", "Germany", "France"];

/// Focusable element of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    SubmitButton,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldName::FullName)
    }
}

impl Focus {
    /// Number of stops in the focus ring (fields + submit button)
    const COUNT: usize = FieldName::ALL.len() + 1;

    fn index(&self) -> usize {
        match self {
            Focus::Field(field) => field.index(),
            Focus::SubmitButton => FieldName::ALL.len(),
        }
    }

    fn from_index(index: usize) -> Self {
        FieldName::ALL
            .get(index)
            .copied()
            .map(Focus::Field)
            .unwrap_or(Focus::SubmitButton)
    }

    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::COUNT)
    }

    pub fn prev(&self) -> Self {
        let current = self.index();
        if current == 0 {
            Self::from_index(Self::COUNT - 1)
        } else {
            Self::from_index(current - 1)
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The profile form engine
    pub form: ProfileForm,
    /// Currently focused element
    pub focus: Focus,
    /// Selectable countries (without the placeholder)
    pub countries: Vec<String>,
    /// Whether the password is shown in clear text
    pub password_visible: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
            false,
        )
    }
}

impl AppState {
    pub fn new(countries: Vec<String>, password_visible: bool) -> Self {
        Self {
            form: ProfileForm::new(),
            focus: Focus::default(),
            countries,
            password_visible,
            status_message: None,
        }
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Country options as shown in the select: placeholder first
    pub fn country_options(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once("").chain(self.countries.iter().map(String::as_str))
    }

    /// The country after (or before) `current`, wrapping through the placeholder
    pub fn cycle_country(&self, current: &str, forward: bool) -> String {
        let options: Vec<&str> = self.country_options().collect();
        let len = options.len() as i64;
        let idx = options.iter().position(|c| *c == current).unwrap_or(0) as i64;
        let step = if forward { 1 } else { -1 };
        let next = (idx + step).rem_euclid(len) as usize;
        options[next].to_string()
    }
}
