//! Wires registered strategies into the authentication middleware.

use std::sync::Arc;

use admin_auth_sdk::{AuthMiddleware, HostContext, Strategy};
use tracing::{error, info};

use super::error::InitError;
use super::local_strategy::create_local_strategy;
use super::registry::ProviderRegistry;

/// What the initializer installed, in install order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    installed: Vec<String>,
}

impl InitReport {
    #[must_use]
    pub fn installed(&self) -> &[String] {
        &self.installed
    }
}

/// Builds every provider's strategy plus the local one and activates the middleware.
pub struct Initializer {
    registry: Arc<ProviderRegistry>,
    host: HostContext,
}

impl Initializer {
    #[must_use]
    pub fn new(registry: Arc<ProviderRegistry>, host: HostContext) -> Self {
        Self { registry, host }
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn host(&self) -> &HostContext {
        &self.host
    }

    /// Install `registry.len() + 1` strategies, activate once, then seal the registry.
    ///
    /// The registry must already be populated. Provider strategies are
    /// installed in registry order and the local strategy last. All strategies
    /// are built before the first install, so a factory failure leaves the
    /// middleware untouched and the registry open.
    ///
    /// # Errors
    ///
    /// - [`InitError::AlreadyInitialized`] if the registry is sealed
    /// - [`InitError::Strategy`] if a provider factory fails
    #[tracing::instrument(skip_all, fields(providers = self.registry.len()))]
    pub fn init<M>(&self, middleware: &mut M) -> Result<InitReport, InitError>
    where
        M: AuthMiddleware + ?Sized,
    {
        if self.registry.is_sealed() {
            return Err(InitError::AlreadyInitialized);
        }

        let providers = self.registry.providers();
        let mut strategies: Vec<Arc<dyn Strategy>> = Vec::with_capacity(providers.len() + 1);
        for provider in &providers {
            let strategy = provider.create_strategy(&self.host).map_err(|source| {
                error!(uid = provider.uid(), error = %source, "strategy creation failed");
                InitError::Strategy {
                    uid: provider.uid().to_owned(),
                    source,
                }
            })?;
            strategies.push(strategy);
        }
        strategies.push(create_local_strategy(&self.host));

        let installed: Vec<String> = strategies.iter().map(|s| s.name().to_owned()).collect();
        for strategy in strategies {
            middleware.install(strategy);
        }
        middleware.activate();

        // Later registry changes would never reach the activated middleware.
        self.registry.seal();

        info!(strategies = ?installed, "admin authentication initialized");
        Ok(InitReport { installed })
    }
}
