//! Per-field hint text shown for the focused input

use crate::state::FieldName;

pub fn tooltip(field: FieldName) -> &'static str {
    match field {
        FieldName::FullName => "Enter your full name (at least 3 characters).",
        FieldName::Email => "Enter a valid email address (e.g., example@mail.com).",
        FieldName::Password => {
            "Password must be at least 8 characters, include a number and a special character."
        }
        FieldName::PhoneNumber => "Enter your phone number (10 digits).",
        FieldName::Age => "Enter your age (between 18 and 65).",
        FieldName::Country => "Select your country.",
        FieldName::AgreeToTerms => "You must accept the terms to continue.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_a_tooltip() {
        for field in FieldName::ALL {
            assert!(!tooltip(field).is_empty());
        }
    }
}
