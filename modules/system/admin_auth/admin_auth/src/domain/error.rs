//! Domain errors for the admin authentication module.

use admin_auth_sdk::AdminAuthError;
use thiserror::Error;

/// Registry mutation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Mutation attempted after the registry was sealed.
    #[error("You can't register new provider after the boostrap")]
    Sealed,

    #[error("provider uid must not be empty")]
    EmptyUid,

    #[error("provider uid '{uid}' is reserved for the built-in local strategy")]
    ReservedUid { uid: String },
}

/// Configuration records that cannot become providers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("providers[{index}]: uid must not be empty")]
    EmptyUid { index: usize },

    #[error("provider uid '{uid}' is reserved for the built-in local strategy")]
    ReservedUid { uid: String },

    #[error("provider '{uid}' references unknown strategy factory '{factory}'")]
    UnknownFactory { uid: String, factory: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Strategy initialization failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    #[error("authentication strategies are already initialized")]
    AlreadyInitialized,

    #[error("failed to create strategy for provider '{uid}': {source}")]
    Strategy {
        uid: String,
        #[source]
        source: AdminAuthError,
    },
}

/// Failure of the full sync-then-init bootstrap sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Init(#[from] InitError),
}
