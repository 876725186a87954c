//! Traits at the seams of the admin authentication subsystem.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AdminAuthError, CredentialError};
use crate::models::{CredentialVerdict, StrategyContext};

/// A runtime authentication handler.
///
/// Strategies are opaque to the provider registry. The middleware stores them
/// by [`Strategy::name`] and may recover the concrete type through
/// [`Strategy::as_any`].
pub trait Strategy: Send + Sync + 'static {
    /// Name the middleware dispatches on (the provider uid, or `local`).
    fn name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;
}

/// Builds the strategy for one provider.
///
/// Called exactly once per provider during initialization.
pub trait StrategyFactory: Send + Sync {
    /// Create the strategy instance for the provider described by `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminAuthError::InvalidOptions`] when the provider options
    /// cannot be used, or another variant when the host context is unusable.
    fn create_strategy(
        &self,
        ctx: &StrategyContext<'_>,
    ) -> Result<Arc<dyn Strategy>, AdminAuthError>;
}

/// Host-owned credential verification used by the local strategy.
///
/// ```ignore
/// match checker.check_credentials("admin@example.com", "secret").await? {
///     CredentialVerdict::Accepted { user, .. } => login(user),
///     CredentialVerdict::Rejected { info } => deny(info),
/// }
/// ```
#[async_trait]
pub trait CredentialChecker: Send + Sync {
    /// Verify an identifier/secret pair.
    ///
    /// # Errors
    ///
    /// Returns a [`CredentialError`] when the check itself could not be
    /// performed. A wrong password is not an error: it resolves to
    /// [`CredentialVerdict::Rejected`].
    async fn check_credentials(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<CredentialVerdict, CredentialError>;
}

/// Session/authentication middleware sink.
///
/// The initializer calls [`AuthMiddleware::install`] once per strategy and
/// [`AuthMiddleware::activate`] exactly once afterwards.
pub trait AuthMiddleware {
    fn install(&mut self, strategy: Arc<dyn Strategy>);

    fn activate(&mut self);
}
