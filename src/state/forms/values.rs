//! Profile form values

use super::field::{FieldName, FieldValue};
use serde::{Deserialize, Serialize};

/// Age as entered: typed text from an input, or a number from a programmatic caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeValue {
    Number(i64),
    Text(String),
}

impl Default for AgeValue {
    fn default() -> Self {
        AgeValue::Text(String::new())
    }
}

impl AgeValue {
    /// Numeric reading of the age.
    ///
    /// Text is trimmed and parsed as a float; empty, unparsable or non-finite
    /// text has no numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AgeValue::Number(n) => Some(*n as f64),
            AgeValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    pub fn display_value(&self) -> String {
        match self {
            AgeValue::Number(n) => n.to_string(),
            AgeValue::Text(s) => s.clone(),
        }
    }
}

impl From<&FieldValue> for AgeValue {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Number(n) => AgeValue::Number(*n),
            other => AgeValue::Text(other.to_text()),
        }
    }
}

/// Snapshot of every profile field. All seven are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub age: AgeValue,
    pub country: String,
    pub agree_to_terms: bool,
}

impl FormValues {
    /// Store a raw value into the given field, coercing it to the field's type
    pub fn set(&mut self, field: FieldName, value: &FieldValue) {
        match field {
            FieldName::FullName => self.full_name = value.to_text(),
            FieldName::Email => self.email = value.to_text(),
            FieldName::Password => self.password = value.to_text(),
            FieldName::PhoneNumber => self.phone_number = value.to_text(),
            FieldName::Age => self.age = AgeValue::from(value),
            FieldName::Country => self.country = value.to_text(),
            FieldName::AgreeToTerms => self.agree_to_terms = value.to_bool(),
        }
    }

    /// Current value of a field as a raw value
    pub fn get(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::FullName => FieldValue::Text(self.full_name.clone()),
            FieldName::Email => FieldValue::Text(self.email.clone()),
            FieldName::Password => FieldValue::Text(self.password.clone()),
            FieldName::PhoneNumber => FieldValue::Text(self.phone_number.clone()),
            FieldName::Age => match &self.age {
                AgeValue::Number(n) => FieldValue::Number(*n),
                AgeValue::Text(s) => FieldValue::Text(s.clone()),
            },
            FieldName::Country => FieldValue::Text(self.country.clone()),
            FieldName::AgreeToTerms => FieldValue::Bool(self.agree_to_terms),
        }
    }

    /// Copy safe to write to logs: a non-empty password is replaced
    pub fn redacted(&self) -> Self {
        let mut values = self.clone();
        if !values.password.is_empty() {
            values.password = "[redacted]".to_string();
        }
        values
    }

    /// Text shown in the field's input
    pub fn display_value(&self, field: FieldName) -> String {
        match field {
            FieldName::Age => self.age.display_value(),
            FieldName::AgreeToTerms => self.agree_to_terms.to_string(),
            other => self.get(other).to_text(),
        }
    }
}
