//! GreenMind Client - Typed HTTP client for the GreenMind REST API.
//!
//! The backend is an external REST/JSON service; this crate is the only
//! place that talks to it. It provides:
//!
//! - [`config`] - Environment-driven configuration (base URL, session file)
//! - [`session`] - Durable bearer-token storage surviving process restarts
//! - [`api`] - The [`ApiClient`] gateway plus one module per resource
//!   group (auth, users, quizzes, missions, tips, stats)
//! - [`types`] - Wire DTOs matching the backend's camelCase JSON
//!
//! # Example
//!
//! ```rust,no_run
//! use greenmind_client::{ApiClient, ClientConfig, SessionStore};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let session = SessionStore::new(&config.session_file);
//! let client = ApiClient::new(&config, session)?;
//! let tips = client.list_tips().await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod types;

pub use api::ApiClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use session::{SessionError, SessionStore};
