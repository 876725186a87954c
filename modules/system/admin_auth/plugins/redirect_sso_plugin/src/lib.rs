//! Redirect SSO plugin for admin authentication.
//!
//! Provides the `redirect_sso` strategy factory: each configured provider gets
//! a strategy holding the identity provider's authorization URL and the admin
//! callback path the provider redirects back to.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::sync::Arc;

use admin_auth::StrategyCatalog;

pub mod config;
pub mod domain;

pub use config::RedirectSsoOptions;
pub use domain::{RedirectSsoFactory, RedirectSsoStrategy};

/// Catalog name providers reference in their `factory` field.
pub const FACTORY_NAME: &str = "redirect_sso";

/// Add the `redirect_sso` factory to `catalog`.
pub fn register_redirect_sso(catalog: &mut StrategyCatalog) {
    if catalog
        .insert(FACTORY_NAME, Arc::new(RedirectSsoFactory))
        .is_some()
    {
        tracing::warn!(factory = FACTORY_NAME, "replaced existing strategy factory");
    }
}
