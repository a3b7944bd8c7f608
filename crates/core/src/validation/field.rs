//! Per-field validators.
//!
//! Each validator takes one raw input string and either accepts it or
//! returns the [`FieldError`] whose message the form should display.
//! All functions are pure and deterministic.

use thiserror::Error;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum trimmed length for name fields.
const MIN_NAME_LENGTH: usize = 2;

/// Minimum trimmed length for the address field.
const MIN_ADDRESS_LENGTH: usize = 5;

/// Length of the email verification code.
const VERIFICATION_CODE_LENGTH: usize = 6;

/// A failed field check, carrying the user-facing message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailFormat,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Password must contain at least one letter and one number")]
    PasswordComposition,
    #[error("Full name is required")]
    FullNameRequired,
    #[error("Full name must be at least 2 characters long")]
    FullNameTooShort,
    #[error("Full name can only contain letters and spaces")]
    FullNameInvalidChars,
    #[error("Surname must be at least 2 characters long")]
    SurnameTooShort,
    #[error("Surname can only contain letters and spaces")]
    SurnameInvalidChars,
    #[error("Address must be at least 5 characters long")]
    AddressTooShort,
    #[error("Please confirm your password")]
    ConfirmPasswordRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Verification code must be 6 digits")]
    VerificationCodeLength,
}

/// Validate an email address.
///
/// Accepts `local@domain.tld` where no part contains whitespace or a
/// second `@`, and the domain carries at least one interior dot.
///
/// # Errors
///
/// Returns [`FieldError::EmailRequired`] for blank input and
/// [`FieldError::EmailFormat`] for anything not matching the shape above.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() {
        return Err(FieldError::EmailRequired);
    }

    if !has_email_shape(email) {
        return Err(FieldError::EmailFormat);
    }

    Ok(())
}

/// Structural email check: `[^\s@]+ "@" [^\s@]+ "." [^\s@]+`.
fn has_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    // A second @ is not allowed anywhere.
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // The domain needs an interior dot: at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

/// Validate a password.
///
/// # Errors
///
/// Returns an error if the password is empty, shorter than 8 characters,
/// or missing a letter or a digit.
pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        return Err(FieldError::PasswordRequired);
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FieldError::PasswordTooShort);
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_letter || !has_digit {
        return Err(FieldError::PasswordComposition);
    }

    Ok(())
}

/// Validate the required full-name field.
///
/// # Errors
///
/// Returns an error if the trimmed name is blank, shorter than 2
/// characters, or contains anything other than letters and spaces.
pub fn validate_full_name(full_name: &str) -> Result<(), FieldError> {
    let trimmed = full_name.trim();

    if trimmed.is_empty() {
        return Err(FieldError::FullNameRequired);
    }

    if trimmed.chars().count() < MIN_NAME_LENGTH {
        return Err(FieldError::FullNameTooShort);
    }

    if !is_letters_and_spaces(trimmed) {
        return Err(FieldError::FullNameInvalidChars);
    }

    Ok(())
}

/// Validate the optional surname field. Blank input is valid.
///
/// # Errors
///
/// Returns an error if a non-blank surname is shorter than 2 characters or
/// contains anything other than letters and spaces.
pub fn validate_surname(surname: &str) -> Result<(), FieldError> {
    let trimmed = surname.trim();

    if trimmed.is_empty() {
        return Ok(());
    }

    if trimmed.chars().count() < MIN_NAME_LENGTH {
        return Err(FieldError::SurnameTooShort);
    }

    if !is_letters_and_spaces(trimmed) {
        return Err(FieldError::SurnameInvalidChars);
    }

    Ok(())
}

/// Validate the optional address field. Blank input is valid.
///
/// # Errors
///
/// Returns an error if a non-blank address is shorter than 5 characters.
pub fn validate_address(address: &str) -> Result<(), FieldError> {
    let trimmed = address.trim();

    if trimmed.is_empty() {
        return Ok(());
    }

    if trimmed.chars().count() < MIN_ADDRESS_LENGTH {
        return Err(FieldError::AddressTooShort);
    }

    Ok(())
}

/// Validate the confirm-password field against the live password value.
///
/// The comparison is exact and case-sensitive.
///
/// # Errors
///
/// Returns an error if the confirmation is empty or differs from
/// `password`.
pub fn validate_confirm_password(password: &str, confirm_password: &str) -> Result<(), FieldError> {
    if confirm_password.is_empty() {
        return Err(FieldError::ConfirmPasswordRequired);
    }

    if password != confirm_password {
        return Err(FieldError::PasswordMismatch);
    }

    Ok(())
}

/// Validate an email verification code: exactly 6 characters after
/// trimming.
///
/// # Errors
///
/// Returns [`FieldError::VerificationCodeLength`] otherwise.
pub fn validate_verification_code(code: &str) -> Result<(), FieldError> {
    if code.trim().chars().count() == VERIFICATION_CODE_LENGTH {
        Ok(())
    } else {
        Err(FieldError::VerificationCodeLength)
    }
}

fn is_letters_and_spaces(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("user.name+tag@sub.example.com").is_ok());
        assert!(validate_email("user@example.co.uk").is_ok());
    }

    #[test]
    fn test_email_required() {
        assert_eq!(validate_email(""), Err(FieldError::EmailRequired));
        assert_eq!(validate_email("   "), Err(FieldError::EmailRequired));
    }

    #[test]
    fn test_email_missing_at() {
        assert_eq!(validate_email("no-at-symbol"), Err(FieldError::EmailFormat));
    }

    #[test]
    fn test_email_missing_domain_dot() {
        assert_eq!(validate_email("user@localhost"), Err(FieldError::EmailFormat));
    }

    #[test]
    fn test_email_empty_parts() {
        assert_eq!(validate_email("@example.com"), Err(FieldError::EmailFormat));
        assert_eq!(validate_email("user@"), Err(FieldError::EmailFormat));
        assert_eq!(validate_email("user@.com"), Err(FieldError::EmailFormat));
        assert_eq!(validate_email("user@example."), Err(FieldError::EmailFormat));
    }

    #[test]
    fn test_email_rejects_whitespace_and_double_at() {
        assert_eq!(validate_email("us er@example.com"), Err(FieldError::EmailFormat));
        assert_eq!(validate_email(" a@b.co "), Err(FieldError::EmailFormat));
        assert_eq!(validate_email("a@b@c.com"), Err(FieldError::EmailFormat));
    }

    #[test]
    fn test_password_valid() {
        assert!(validate_password("abc12345").is_ok());
        assert!(validate_password("longEnough1").is_ok());
    }

    #[test]
    fn test_password_required() {
        assert_eq!(validate_password(""), Err(FieldError::PasswordRequired));
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(validate_password("a1b2c3d"), Err(FieldError::PasswordTooShort));
    }

    #[test]
    fn test_password_composition() {
        // Digits only.
        assert_eq!(validate_password("12345678"), Err(FieldError::PasswordComposition));
        // Letters only.
        assert_eq!(validate_password("abcdefgh"), Err(FieldError::PasswordComposition));
    }

    #[test]
    fn test_full_name() {
        assert!(validate_full_name("Ada Lovelace").is_ok());
        assert_eq!(validate_full_name("  "), Err(FieldError::FullNameRequired));
        assert_eq!(validate_full_name("A"), Err(FieldError::FullNameTooShort));
        assert_eq!(validate_full_name("Ada42"), Err(FieldError::FullNameInvalidChars));
        assert_eq!(validate_full_name("Ada_L"), Err(FieldError::FullNameInvalidChars));
    }

    #[test]
    fn test_surname_optional() {
        assert!(validate_surname("").is_ok());
        assert!(validate_surname("   ").is_ok());
        assert!(validate_surname("Lovelace").is_ok());
        assert_eq!(validate_surname("L"), Err(FieldError::SurnameTooShort));
        assert_eq!(validate_surname("L0velace"), Err(FieldError::SurnameInvalidChars));
    }

    #[test]
    fn test_address_optional() {
        assert!(validate_address("").is_ok());
        assert!(validate_address("12 Green Lane").is_ok());
        assert_eq!(validate_address("1 st"), Err(FieldError::AddressTooShort));
    }

    #[test]
    fn test_confirm_password_matches_any_string() {
        for p in ["", "abc12345", "päss wörd 1", "  spaced  "] {
            if p.is_empty() {
                assert_eq!(
                    validate_confirm_password(p, p),
                    Err(FieldError::ConfirmPasswordRequired)
                );
            } else {
                assert!(validate_confirm_password(p, p).is_ok());
            }
            let altered = format!("{p}x");
            assert_eq!(
                validate_confirm_password(p, &altered),
                Err(FieldError::PasswordMismatch)
            );
        }
    }

    #[test]
    fn test_confirm_password_case_sensitive() {
        assert_eq!(
            validate_confirm_password("Abc12345", "abc12345"),
            Err(FieldError::PasswordMismatch)
        );
    }

    #[test]
    fn test_verification_code() {
        assert!(validate_verification_code("483920").is_ok());
        assert!(validate_verification_code(" 483920 ").is_ok());
        assert_eq!(
            validate_verification_code("12345"),
            Err(FieldError::VerificationCodeLength)
        );
        assert_eq!(
            validate_verification_code("1234567"),
            Err(FieldError::VerificationCodeLength)
        );
        assert_eq!(
            validate_verification_code(""),
            Err(FieldError::VerificationCodeLength)
        );
    }

    #[test]
    fn test_error_messages_match_ui_copy() {
        assert_eq!(FieldError::EmailRequired.to_string(), "Email is required");
        assert_eq!(
            FieldError::PasswordComposition.to_string(),
            "Password must contain at least one letter and one number"
        );
        assert_eq!(FieldError::PasswordMismatch.to_string(), "Passwords do not match");
    }
}
