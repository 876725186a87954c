//! Bootstrap facade: config sync followed by strategy initialization.

use std::sync::Arc;

use admin_auth_sdk::{AuthMiddleware, HostContext};
use tracing::info;

use super::catalog::StrategyCatalog;
use super::error::BootstrapError;
use super::initializer::{InitReport, Initializer};
use super::registry::ProviderRegistry;
use super::sync::sync_provider_registry_with_config;
use crate::config::AdminAuthConfig;

/// Admin authentication service.
///
/// Owns the provider registry for the lifetime of the process and runs the
/// bootstrap sequence in its fixed order.
pub struct Service {
    registry: Arc<ProviderRegistry>,
    catalog: StrategyCatalog,
    initializer: Initializer,
}

impl Service {
    #[must_use]
    pub fn new(registry: Arc<ProviderRegistry>, catalog: StrategyCatalog, host: HostContext) -> Self {
        let initializer = Initializer::new(registry.clone(), host);
        Self {
            registry,
            catalog,
            initializer,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn catalog(&self) -> &StrategyCatalog {
        &self.catalog
    }

    /// Sync the registry with `config`, then initialize `middleware`.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Sync`] if the configuration is invalid or the
    /// registry is sealed, and [`BootstrapError::Init`] if a strategy cannot be
    /// built. Nothing is installed when sync fails.
    pub fn bootstrap<M>(
        &self,
        config: &AdminAuthConfig,
        middleware: &mut M,
    ) -> Result<InitReport, BootstrapError>
    where
        M: AuthMiddleware + ?Sized,
    {
        info!(
            configured = config.providers.len(),
            factories = ?self.catalog.names(),
            "bootstrapping admin authentication"
        );
        sync_provider_registry_with_config(&self.registry, config, &self.catalog)?;
        Ok(self.initializer.init(middleware)?)
    }
}
