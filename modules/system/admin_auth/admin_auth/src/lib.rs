//! Admin Auth Module
//!
//! Keeps the registry of authentication providers for the admin panel,
//! populates it from configuration and wires every provider's strategy,
//! plus the built-in local strategy, into the authentication middleware.
//!
//! Bootstrap order is fixed: config sync, then initialization. The registry
//! is sealed once the middleware has been activated.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod test_support;

pub use config::{AdminAuthConfig, ConfigError, ProviderConfig};
pub use domain::{
    AuthEvent, BootstrapError, InitError, InitReport, Initializer, LOCAL_STRATEGY_NAME,
    LocalStrategy, ProviderRegistry, RegistryError, RegistryLifecycle, Service, StrategyCatalog,
    StrategyTable, SyncError, create_local_strategy, sync_provider_registry_with_config,
};
