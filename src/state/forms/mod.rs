//! Form domain layer
//!
//! Typed profile values and the coordinator that keeps their validation
//! state consistent.

mod coordinator;
mod field;
mod values;

pub use coordinator::{FormPhase, ProfileForm, SubmitOutcome};
pub use field::{FieldName, FieldValue};
pub use values::{AgeValue, FormValues};
