//! Insertion-ordered provider registry with a one-way seal.

use admin_auth_sdk::Provider;
use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::error::RegistryError;
use super::local_strategy::LOCAL_STRATEGY_NAME;

/// Registry lifecycle. `Open` accepts registrations, `Sealed` never does again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegistryLifecycle {
    #[default]
    Open,
    Sealed,
}

#[derive(Default)]
struct RegistryState {
    lifecycle: RegistryLifecycle,
    providers: IndexMap<String, Provider>,
}

impl RegistryState {
    fn ensure_open(&self) -> Result<(), RegistryError> {
        if self.lifecycle == RegistryLifecycle::Sealed {
            warn!("rejected provider registration after seal");
            return Err(RegistryError::Sealed);
        }
        Ok(())
    }

    fn insert(&mut self, provider: Provider) -> Result<(), RegistryError> {
        self.ensure_open()?;
        if provider.uid().trim().is_empty() {
            return Err(RegistryError::EmptyUid);
        }
        // The built-in local strategy is always installed under this name.
        if provider.uid() == LOCAL_STRATEGY_NAME {
            return Err(RegistryError::ReservedUid {
                uid: provider.uid().to_owned(),
            });
        }

        let uid = provider.uid().to_owned();
        // IndexMap keeps the original slot when the key already exists.
        let replaced = self.providers.insert(uid.clone(), provider).is_some();
        debug!(uid = %uid, replaced, "registered provider");
        Ok(())
    }
}

/// Keyed store of authentication providers.
///
/// Registration is last-write-wins per uid and keeps the uid's first
/// position, so iteration order is the order in which uids first appeared.
/// Once [`ProviderRegistry::seal`] has been called every mutation fails;
/// reads stay valid.
#[derive(Default)]
pub struct ProviderRegistry {
    state: RwLock<RegistryState>,
}

impl ProviderRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the provider keyed by its uid.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Sealed`] after [`ProviderRegistry::seal`]
    /// - [`RegistryError::EmptyUid`] for a blank uid
    /// - [`RegistryError::ReservedUid`] for the local strategy's name
    pub fn register(&self, provider: Provider) -> Result<(), RegistryError> {
        self.state.write().insert(provider)
    }

    /// Register each provider in order, as repeated [`ProviderRegistry::register`] calls would.
    ///
    /// # Errors
    ///
    /// Fails with [`RegistryError::Sealed`] after [`ProviderRegistry::seal`],
    /// even for an empty batch. Otherwise stops at the first failing provider;
    /// providers before it stay registered.
    pub fn register_many<I>(&self, providers: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = Provider>,
    {
        let mut state = self.state.write();
        state.ensure_open()?;
        for provider in providers {
            state.insert(provider)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, uid: &str) -> Option<Provider> {
        self.state.read().providers.get(uid).cloned()
    }

    #[must_use]
    pub fn contains(&self, uid: &str) -> bool {
        self.state.read().providers.contains_key(uid)
    }

    /// Number of distinct uids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().providers.is_empty()
    }

    #[must_use]
    pub fn uids(&self) -> Vec<String> {
        self.state.read().providers.keys().cloned().collect()
    }

    /// Snapshot of all providers in registration order.
    #[must_use]
    pub fn providers(&self) -> Vec<Provider> {
        self.state.read().providers.values().cloned().collect()
    }

    /// Remove every provider. Ignores the seal and does not reopen the registry.
    pub fn clear(&self) {
        let mut state = self.state.write();
        let removed = state.providers.len();
        state.providers.clear();
        debug!(removed, "cleared provider registry");
    }

    /// Transition to [`RegistryLifecycle::Sealed`]. Idempotent.
    pub fn seal(&self) {
        let mut state = self.state.write();
        if state.lifecycle == RegistryLifecycle::Open {
            state.lifecycle = RegistryLifecycle::Sealed;
            info!(providers = state.providers.len(), "provider registry sealed");
        }
    }

    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.lifecycle() == RegistryLifecycle::Sealed
    }

    #[must_use]
    pub fn lifecycle(&self) -> RegistryLifecycle {
        self.state.read().lifecycle
    }
}
