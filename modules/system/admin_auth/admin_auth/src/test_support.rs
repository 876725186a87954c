#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::any::Any;
use std::sync::Arc;

use admin_auth_sdk::{
    AdminAuthError, AuthMiddleware, CredentialChecker, CredentialError, CredentialVerdict,
    HostContext, Provider, Strategy, StrategyContext, StrategyFactory,
};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Strategy that only carries its name.
pub struct NamedStrategy {
    pub name: String,
}

impl Strategy for NamedStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Factory producing a [`NamedStrategy`] named after the provider uid.
pub struct NamedFactory;

impl StrategyFactory for NamedFactory {
    fn create_strategy(
        &self,
        ctx: &StrategyContext<'_>,
    ) -> Result<Arc<dyn Strategy>, AdminAuthError> {
        Ok(Arc::new(NamedStrategy {
            name: ctx.uid().to_owned(),
        }))
    }
}

/// Factory that always fails.
pub struct FailingFactory;

impl StrategyFactory for FailingFactory {
    fn create_strategy(
        &self,
        ctx: &StrategyContext<'_>,
    ) -> Result<Arc<dyn Strategy>, AdminAuthError> {
        Err(AdminAuthError::InvalidOptions {
            uid: ctx.uid().to_owned(),
            reason: "client_id is required".to_owned(),
        })
    }
}

#[must_use]
pub fn provider(uid: &str) -> Provider {
    Provider::new(uid, Arc::new(NamedFactory))
}

/// Credential checker replaying a fixed result and recording its inputs.
pub struct ScriptedChecker {
    result: Result<CredentialVerdict, CredentialError>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedChecker {
    #[must_use]
    pub fn new(result: Result<CredentialVerdict, CredentialError>) -> Self {
        Self {
            result,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CredentialChecker for ScriptedChecker {
    async fn check_credentials(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<CredentialVerdict, CredentialError> {
        self.calls
            .lock()
            .push((identifier.to_owned(), secret.to_owned()));
        self.result.clone()
    }
}

#[must_use]
pub fn host() -> HostContext {
    HostContext::new(Arc::new(ScriptedChecker::new(Err(CredentialError::new(
        "not configured",
    )))))
}

/// Middleware call as observed by [`RecordingMiddleware`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MiddlewareCall {
    Install(String),
    Activate,
}

/// Middleware sink recording every call in order.
#[derive(Default)]
pub struct RecordingMiddleware {
    pub calls: Vec<MiddlewareCall>,
}

impl RecordingMiddleware {
    #[must_use]
    pub fn installs(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, MiddlewareCall::Install(_)))
            .count()
    }

    #[must_use]
    pub fn activations(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, MiddlewareCall::Activate))
            .count()
    }
}

impl AuthMiddleware for RecordingMiddleware {
    fn install(&mut self, strategy: Arc<dyn Strategy>) {
        self.calls
            .push(MiddlewareCall::Install(strategy.name().to_owned()));
    }

    fn activate(&mut self) {
        self.calls.push(MiddlewareCall::Activate);
    }
}
