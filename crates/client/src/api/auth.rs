//! Authentication endpoints.

use reqwest::Method;
use secrecy::SecretString;
use serde::Serialize;
use tracing::instrument;

use super::ApiClient;
use crate::error::ApiError;
use crate::types::{AuthResponse, Credentials, SignupData, expose_password};

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    surname: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<&'a str>,
    email: &'a str,
    #[serde(serialize_with = "expose_password")]
    password: &'a SecretString,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    #[serde(serialize_with = "expose_password")]
    password: &'a SecretString,
}

#[derive(Serialize)]
struct VerifyEmailRequest<'a> {
    email: &'a str,
    code: &'a str,
}

impl ApiClient {
    /// Register a new account.
    ///
    /// The backend sends a verification code to the given address; the
    /// returned token, if any, is only usable after verification.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the
    /// registration (for example, an already-registered email).
    #[instrument(skip(self, data), fields(email = %data.email))]
    pub async fn register(&self, data: &SignupData) -> Result<AuthResponse, ApiError> {
        let request = RegisterRequest {
            name: &data.name,
            surname: data.surname.as_deref(),
            address: data.address.as_deref(),
            email: &data.email,
            password: &data.password,
        };
        self.execute_with_body(Method::POST, "/auth/register", &request)
            .await
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credentials are
    /// rejected.
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let request = LoginRequest {
            email: &credentials.email,
            password: &credentials.password,
        };
        self.execute_with_body(Method::POST, "/auth/login", &request)
            .await
    }

    /// Confirm an email address with the 6-digit verification code.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the code is wrong or
    /// expired.
    #[instrument(skip(self, code), fields(email = %email))]
    pub async fn verify_email(&self, email: &str, code: &str) -> Result<AuthResponse, ApiError> {
        let request = VerifyEmailRequest { email, code };
        self.execute_with_body(Method::POST, "/auth/verify-email", &request)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_omits_blank_optionals() {
        let data = SignupData {
            name: "Ada".to_owned(),
            surname: None,
            address: None,
            email: "ada@example.com".to_owned(),
            password: SecretString::from("abc12345".to_owned()),
        };
        let request = RegisterRequest {
            name: &data.name,
            surname: data.surname.as_deref(),
            address: data.address.as_deref(),
            email: &data.email,
            password: &data.password,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("surname").is_none());
        assert!(value.get("address").is_none());
        assert_eq!(value["password"], "abc12345");
    }

    #[test]
    fn test_login_request_serializes_password() {
        let credentials = Credentials::new("a@b.co", "abc12345");
        let request = LoginRequest {
            email: &credentials.email,
            password: &credentials.password,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["email"], "a@b.co");
        assert_eq!(value["password"], "abc12345");
    }
}
