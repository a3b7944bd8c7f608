//! Whole-form validation.
//!
//! Composes the per-field validators into a single pass over a form,
//! collecting every failure into a field -> message map. A form is valid
//! iff the map comes back empty.

use core::fmt;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::field::{
    self, FieldError, validate_address, validate_confirm_password, validate_email,
    validate_full_name, validate_password, validate_surname,
};

/// Identifies a form field in a validation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Surname,
    Address,
    Email,
    Password,
    ConfirmPassword,
    VerificationCode,
}

impl FormField {
    /// Returns the camelCase field key as used by the forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
            Self::Address => "address",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::VerificationCode => "verificationCode",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidation {
    errors: BTreeMap<FormField, FieldError>,
}

impl FormValidation {
    /// True iff no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failed fields with their errors, ordered by field.
    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<FormField, FieldError> {
        &self.errors
    }

    /// The user-facing message for one field, if it failed.
    #[must_use]
    pub fn message(&self, form_field: FormField) -> Option<String> {
        self.errors.get(&form_field).map(ToString::to_string)
    }

    fn check(&mut self, form_field: FormField, result: Result<(), FieldError>) {
        if let Err(error) = result {
            self.errors.insert(form_field, error);
        }
    }
}

/// Raw login form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Raw signup form values.
///
/// Every field is the literal input string; normalisation (trimming,
/// dropping blank optionals) happens when the form is turned into a
/// registration request, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub surname: String,
    pub address: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validate a login form: email and password.
#[must_use]
pub fn validate_login_form(form: &LoginForm) -> FormValidation {
    let mut validation = FormValidation::default();
    validation.check(FormField::Email, validate_email(&form.email));
    validation.check(FormField::Password, validate_password(&form.password));
    validation
}

/// Validate a signup form.
///
/// The confirm-password check always compares against the form's current
/// password value, never a stored copy.
#[must_use]
pub fn validate_signup_form(form: &SignupForm) -> FormValidation {
    let mut validation = FormValidation::default();
    validation.check(FormField::Name, validate_full_name(&form.name));
    validation.check(FormField::Surname, validate_surname(&form.surname));
    validation.check(FormField::Address, validate_address(&form.address));
    validation.check(FormField::Email, validate_email(&form.email));
    validation.check(FormField::Password, validate_password(&form.password));
    validation.check(
        FormField::ConfirmPassword,
        validate_confirm_password(&form.password, &form.confirm_password),
    );
    validation
}

/// Validate a verification form: a single 6-digit code.
#[must_use]
pub fn validate_verification_form(code: &str) -> FormValidation {
    let mut validation = FormValidation::default();
    validation.check(
        FormField::VerificationCode,
        field::validate_verification_code(code),
    );
    validation
}
