//! Form field identifiers and raw input values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised at the string boundary of the form domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
}

/// The closed set of profile fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    Password,
    PhoneNumber,
    Age,
    Country,
    AgreeToTerms,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 7] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Password,
        FieldName::PhoneNumber,
        FieldName::Age,
        FieldName::Country,
        FieldName::AgreeToTerms,
    ];

    /// Wire key used for string lookup and serialization
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Password => "password",
            Self::PhoneNumber => "phoneNumber",
            Self::Age => "age",
            Self::Country => "country",
            Self::AgreeToTerms => "agreeToTerms",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::PhoneNumber => "Phone Number",
            Self::Age => "Age",
            Self::Country => "Country",
            Self::AgreeToTerms => "Agree to Terms",
        }
    }

    /// Whether the field is edited as free text
    pub fn is_textual(&self) -> bool {
        !matches!(self, Self::Country | Self::AgreeToTerms)
    }

    /// Position in display order
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Raw value delivered by an input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
    Bool(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Text form of the value, as stored by text fields
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
        }
    }

    /// Boolean form of the value, as stored by the terms checkbox
    pub fn to_bool(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Text(s) => s == "true",
            FieldValue::Number(n) => *n != 0,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_from_str() {
        for field in FieldName::ALL {
            assert_eq!(field.key().parse::<FieldName>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let err = "nickname".parse::<FieldName>().unwrap_err();
        assert_eq!(err, FormError::UnknownField("nickname".to_string()));
        assert_eq!(err.to_string(), "unknown form field `nickname`");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert!("FullName".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_serializes_as_wire_key() {
        let json = serde_json::to_string(&FieldName::AgreeToTerms).unwrap();
        assert_eq!(json, "\"agreeToTerms\"");
    }

    #[test]
    fn test_only_select_and_checkbox_are_not_textual() {
        let textual: Vec<_> = FieldName::ALL.into_iter().filter(|f| f.is_textual()).collect();
        assert_eq!(textual.len(), 5);
        assert!(!FieldName::Country.is_textual());
        assert!(!FieldName::AgreeToTerms.is_textual());
    }

    #[test]
    fn test_index_matches_display_order() {
        assert_eq!(FieldName::FullName.index(), 0);
        assert_eq!(FieldName::AgreeToTerms.index(), 6);
    }

    #[test]
    fn test_default_value_is_empty_text() {
        assert_eq!(FieldValue::default(), FieldValue::Text(String::new()));
    }

    #[test]
    fn test_text_coercion() {
        assert_eq!(FieldValue::Number(42).to_text(), "42");
        assert_eq!(FieldValue::Bool(true).to_text(), "true");
        assert_eq!(FieldValue::from("abc").to_text(), "abc");
    }

    #[test]
    fn test_bool_coercion() {
        assert!(FieldValue::Bool(true).to_bool());
        assert!(FieldValue::from("true").to_bool());
        assert!(!FieldValue::from("yes").to_bool());
        assert!(FieldValue::Number(1).to_bool());
        assert!(!FieldValue::Number(0).to_bool());
    }
}
