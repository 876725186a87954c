//! Domain layer for admin authentication.

pub mod catalog;
pub mod error;
pub mod initializer;
pub mod local_strategy;
pub mod registry;
pub mod service;
pub mod strategy_table;
pub mod sync;

pub use catalog::StrategyCatalog;
pub use error::{BootstrapError, InitError, RegistryError, SyncError};
pub use initializer::{InitReport, Initializer};
pub use local_strategy::{AuthEvent, LOCAL_STRATEGY_NAME, LocalStrategy, create_local_strategy};
pub use registry::{ProviderRegistry, RegistryLifecycle};
pub use service::Service;
pub use strategy_table::StrategyTable;
pub use sync::sync_provider_registry_with_config;
