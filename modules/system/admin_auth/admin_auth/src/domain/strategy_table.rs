//! In-process authentication middleware sink.

use std::sync::Arc;

use admin_auth_sdk::{AuthMiddleware, Strategy};
use indexmap::IndexMap;
use tracing::{info, warn};

use super::local_strategy::{LOCAL_STRATEGY_NAME, LocalStrategy};

/// Installed strategies keyed by name, in install order.
///
/// Request handlers look strategies up by name once the table is active.
#[derive(Default)]
pub struct StrategyTable {
    strategies: IndexMap<String, Arc<dyn Strategy>>,
    active: bool,
}

impl StrategyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Strategy>> {
        self.strategies.get(name)
    }

    /// The installed local strategy, if any.
    #[must_use]
    pub fn local(&self) -> Option<&LocalStrategy> {
        self.get(LOCAL_STRATEGY_NAME)
            .and_then(|s| s.as_any().downcast_ref::<LocalStrategy>())
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.strategies.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl AuthMiddleware for StrategyTable {
    fn install(&mut self, strategy: Arc<dyn Strategy>) {
        let name = strategy.name().to_owned();
        if self.active {
            warn!(strategy = %name, "strategy installed after activation");
        }
        if self.strategies.insert(name.clone(), strategy).is_some() {
            warn!(strategy = %name, "replaced previously installed strategy");
        }
    }

    fn activate(&mut self) {
        if self.active {
            warn!("authentication middleware already active");
            return;
        }
        self.active = true;
        info!(strategies = ?self.names(), "authentication middleware activated");
    }
}
