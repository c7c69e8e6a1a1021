//! Form rendering module
//!
//! - `field_renderer`: single input rendering with inline errors
//! - `profile_form`: the profile form and its submit button

mod field_renderer;
mod profile_form;

pub use profile_form::draw_profile_form;
