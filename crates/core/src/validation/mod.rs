//! Input validation for the authentication forms.
//!
//! Split in two layers:
//!
//! - [`field`] - pure per-field checks, each returning `Result<(), FieldError>`
//! - [`form`] - whole-form validation composing the field checks into a
//!   field -> message map
//!
//! Validation runs entirely client-side and blocks submission; a failed
//! check never reaches the network layer.

pub mod field;
pub mod form;

pub use field::FieldError;
pub use form::{FormField, FormValidation, LoginForm, SignupForm};
