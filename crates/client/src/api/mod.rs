//! HTTP gateway for the GreenMind REST API.
//!
//! [`ApiClient`] owns the `reqwest` client and the session store. Every
//! request goes through a shared execute path that attaches the JSON
//! content type and, when a session exists, the `Authorization: Bearer`
//! header, then normalises failures into [`ApiError`].
//!
//! Resource operations live in sibling modules, one per resource group:
//!
//! - `auth` - register, login, verify-email
//! - `users` - user CRUD, profile, points, stats
//! - `quizzes` - quiz CRUD and answer submission
//! - `missions` - mission CRUD, progress, completion
//! - `tips` - tip CRUD and likes
//! - `stats` - read-only global counters

mod auth;
mod missions;
mod quizzes;
mod stats;
mod tips;
mod users;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, ErrorBody};
use crate::session::SessionStore;

/// Client for the GreenMind backend.
///
/// Cheap to clone; clones share the underlying connection pool and the
/// session store.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: SessionStore,
}

impl ApiClient {
    /// Create a client from configuration and a session store.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &ClientConfig, session: SessionStore) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session,
        })
    }

    /// The session store this client reads its bearer token from.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Build a request for `endpoint` (a path starting with `/`).
    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = format!(
            "{}{endpoint}",
            self.base_url.as_str().trim_end_matches('/')
        );

        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token.expose_secret());
        }

        builder
    }

    /// Perform a bodyless request.
    pub(crate) async fn execute<T>(&self, method: Method, endpoint: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        debug!(%method, endpoint, "API request");
        let response = self.request(method, endpoint).send().await?;
        handle_response(response).await
    }

    /// Perform a request with a JSON body.
    pub(crate) async fn execute_with_body<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!(%method, endpoint, "API request");
        let response = self.request(method, endpoint).json(body).send().await?;
        handle_response(response).await
    }
}

/// Map a response to the caller's type, normalising errors.
async fn handle_response<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: extract_error_message(status, &body),
        });
    }

    if status == StatusCode::NO_CONTENT {
        return empty_object();
    }

    let body = response.text().await?;
    if body.is_empty() {
        return empty_object();
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Deserialize `T` from `{}`, for endpoints that answer with no body.
fn empty_object<T>() -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(serde_json::Value::Object(serde_json::Map::new()))
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull a human-readable message out of an error response.
///
/// Prefers the JSON body's `message`, then `error`, then the status
/// reason.
fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.filter(|m| !m.is_empty()) {
            return message;
        }
        if let Some(error) = parsed.error.filter(|e| !e.is_empty()) {
            return error;
        }
    }

    status
        .canonical_reason()
        .map_or_else(|| format!("API Error: {}", status.as_u16()), |reason| {
            format!("API Error: {reason}")
        })
}
