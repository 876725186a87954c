//! Populates the provider registry from configuration.

use admin_auth_sdk::Provider;
use tracing::info;

use super::catalog::StrategyCatalog;
use super::error::SyncError;
use super::local_strategy::LOCAL_STRATEGY_NAME;
use super::registry::ProviderRegistry;
use crate::config::{AdminAuthConfig, ProviderConfig};

/// Register every configured provider, in configuration order.
///
/// All entries are validated before the first registration, so a bad entry
/// leaves the registry untouched. Running the sync again with the same
/// configuration overwrites entries with identical values.
///
/// # Errors
///
/// - [`SyncError::EmptyUid`], [`SyncError::ReservedUid`] or
///   [`SyncError::UnknownFactory`] for an invalid entry
/// - [`SyncError::Registry`] if the registry is already sealed
pub fn sync_provider_registry_with_config(
    registry: &ProviderRegistry,
    config: &AdminAuthConfig,
    catalog: &StrategyCatalog,
) -> Result<(), SyncError> {
    let providers = config
        .providers
        .iter()
        .enumerate()
        .map(|(index, entry)| resolve(index, entry, catalog))
        .collect::<Result<Vec<_>, _>>()?;

    let count = providers.len();
    registry.register_many(providers)?;

    info!(count, total = registry.len(), "synced provider registry with configuration");
    Ok(())
}

fn resolve(
    index: usize,
    entry: &ProviderConfig,
    catalog: &StrategyCatalog,
) -> Result<Provider, SyncError> {
    if entry.uid.trim().is_empty() {
        return Err(SyncError::EmptyUid { index });
    }
    if entry.uid == LOCAL_STRATEGY_NAME {
        return Err(SyncError::ReservedUid {
            uid: entry.uid.clone(),
        });
    }

    let factory = catalog
        .get(&entry.factory)
        .ok_or_else(|| SyncError::UnknownFactory {
            uid: entry.uid.clone(),
            factory: entry.factory.clone(),
        })?;

    Ok(Provider::new(entry.uid.clone(), factory).with_options(entry.options.clone()))
}
