//! Named strategy factories available to configuration.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use admin_auth_sdk::StrategyFactory;

/// Maps the `factory` name used in configuration to a [`StrategyFactory`].
///
/// Plugins add their factories here before the configuration is synced.
#[derive(Clone, Default)]
pub struct StrategyCatalog {
    factories: HashMap<String, Arc<dyn StrategyFactory>>,
}

impl StrategyCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a factory, returning the one previously stored under `name`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        factory: Arc<dyn StrategyFactory>,
    ) -> Option<Arc<dyn StrategyFactory>> {
        self.factories.insert(name.into(), factory)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn StrategyFactory>> {
        self.factories.get(name).cloned()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Factory names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for StrategyCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyCatalog")
            .field("factories", &self.names())
            .finish()
    }
}
