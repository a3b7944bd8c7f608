//! GreenMind Core - Shared types library.
//!
//! This crate provides common types used across all GreenMind client
//! components:
//! - `client` - Typed HTTP client for the GreenMind REST API
//! - `app` - Auth flow and admin CRUD controllers
//! - `cli` - Command-line shell
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no async. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Role and content-kind enums shared by client and app
//! - [`validation`] - Field and form validators for the auth forms

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::{FieldError, FormField, FormValidation};
