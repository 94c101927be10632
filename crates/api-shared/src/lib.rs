//! # API Shared
//!
//! Shared utilities and definitions for the flap selector's outer surfaces.
//!
//! Contains:
//! - Wire request/response types (`wire` module)
//! - Shared services like `HealthService`
//! - Admin-key validation for usage-log export
//!
//! Used by `api-rest` and `flap-cli` for common functionality.

pub mod auth;
pub mod health;
pub mod wire;

pub use auth::{validate_admin_key, AuthError, ADMIN_KEY_HEADER};
pub use health::HealthService;
pub use wire::*;
