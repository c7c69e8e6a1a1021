//! Rules for each profile field

use super::ErrorMap;
use crate::state::{AgeValue, FieldName, FieldValue, FormValues};
use regex::Regex;
use std::sync::LazyLock;

/// Messages shown for failing fields
pub mod messages {
    pub const FULL_NAME: &str = "Full name must be at least 3 characters.";
    pub const EMAIL: &str = "Email must be valid.";
    pub const PASSWORD: &str =
        "Password must be at least 8 characters, include a number, and a special character.";
    pub const PHONE_NUMBER: &str = "Phone number must be exactly 10 digits.";
    pub const AGE: &str = "Age must be between 18 and 65.";
    pub const COUNTRY: &str = "Country is required.";
    pub const AGREE_TO_TERMS: &str = "You must agree to the terms.";
}

const MIN_FULL_NAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 8;
const PASSWORD_SPECIALS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];
const MIN_AGE: f64 = 18.0;
const MAX_AGE: f64 = 65.0;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid phone pattern"));

fn check_full_name(value: &str) -> Option<&'static str> {
    (value.chars().count() < MIN_FULL_NAME_LEN).then_some(messages::FULL_NAME)
}

fn check_email(value: &str) -> Option<&'static str> {
    (!EMAIL_RE.is_match(value)).then_some(messages::EMAIL)
}

fn check_password(value: &str) -> Option<&'static str> {
    let long_enough = value.chars().count() >= MIN_PASSWORD_LEN;
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = value.contains(PASSWORD_SPECIALS);
    (!(long_enough && has_digit && has_special)).then_some(messages::PASSWORD)
}

fn check_phone_number(value: &str) -> Option<&'static str> {
    (!PHONE_RE.is_match(value)).then_some(messages::PHONE_NUMBER)
}

fn check_age(value: &AgeValue) -> Option<&'static str> {
    match value.as_number() {
        Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => None,
        _ => Some(messages::AGE),
    }
}

fn check_country(value: &str) -> Option<&'static str> {
    value.is_empty().then_some(messages::COUNTRY)
}

fn check_agree_to_terms(value: bool) -> Option<&'static str> {
    (!value).then_some(messages::AGREE_TO_TERMS)
}

/// Run one field's rule against the stored values
pub fn validate_field(field: FieldName, values: &FormValues) -> Option<&'static str> {
    match field {
        FieldName::FullName => check_full_name(&values.full_name),
        FieldName::Email => check_email(&values.email),
        FieldName::Password => check_password(&values.password),
        FieldName::PhoneNumber => check_phone_number(&values.phone_number),
        FieldName::Age => check_age(&values.age),
        FieldName::Country => check_country(&values.country),
        FieldName::AgreeToTerms => check_agree_to_terms(values.agree_to_terms),
    }
}

/// Run one field's rule against a raw value, coerced the way `FormValues::set` stores it
#[cfg_attr(not(test), allow(dead_code))]
pub fn validate_value(field: FieldName, value: &FieldValue) -> Option<&'static str> {
    match field {
        FieldName::FullName => check_full_name(&value.to_text()),
        FieldName::Email => check_email(&value.to_text()),
        FieldName::Password => check_password(&value.to_text()),
        FieldName::PhoneNumber => check_phone_number(&value.to_text()),
        FieldName::Age => check_age(&AgeValue::from(value)),
        FieldName::Country => check_country(&value.to_text()),
        FieldName::AgreeToTerms => check_agree_to_terms(value.to_bool()),
    }
}

/// Look a rule up by wire key. Unknown keys never produce an error.
#[cfg_attr(not(test), allow(dead_code))]
pub fn validate_key(key: &str, value: &FieldValue) -> Option<&'static str> {
    key.parse::<FieldName>()
        .ok()
        .and_then(|field| validate_value(field, value))
}

/// Full pass over every field
pub fn validate_all(values: &FormValues) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for field in FieldName::ALL {
        errors.set(field, validate_field(field, values));
    }
    errors
}
