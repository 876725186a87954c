//! Admin Auth SDK
//!
//! This crate provides the public API for the `admin_auth` module:
//!
//! - [`Strategy`] - Runtime authentication handler installed into the middleware
//! - [`StrategyFactory`] - Builds a provider's strategy at initialization time
//! - [`CredentialChecker`] - Host-owned username/password verification
//! - [`AuthMiddleware`] - Sink receiving installed strategies
//! - [`Provider`], [`HostContext`] - Provider descriptor and runtime context
//! - [`CallbackUrlBuilder`] - Provider callback path rendering
//!
//! ## Usage
//!
//! ```ignore
//! use admin_auth_sdk::{HostContext, Provider};
//!
//! let provider = Provider::new("github", github_factory);
//! let strategy = provider.create_strategy(&host)?;
//! middleware.install(strategy);
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod callback;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::{AuthMiddleware, CredentialChecker, Strategy, StrategyFactory};
pub use callback::{CALLBACK_URL_TEMPLATE, CallbackUrlBuilder, get_provider_callback_url};
pub use error::{AdminAuthError, CredentialError};
pub use models::{AdminUser, CredentialVerdict, HostContext, Provider, StrategyContext};
