//! Field rule set
//!
//! One pure rule per profile field. A rule only looks at its own field's
//! value and answers with an error message or nothing.

mod error_map;
mod rules;

pub use error_map::ErrorMap;
pub use rules::{messages, validate_all, validate_field};
