//! Built-in username/password strategy.

use std::any::Any;
use std::sync::Arc;

use admin_auth_sdk::{CredentialChecker, CredentialError, CredentialVerdict, HostContext, Strategy};
use tracing::{debug, info, warn};

/// Strategy name the local strategy is installed under.
pub const LOCAL_STRATEGY_NAME: &str = "local";

/// Connection events emitted by strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    ConnectionSuccess,
    ConnectionError,
}

impl AuthEvent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConnectionSuccess => "admin.auth.success",
            Self::ConnectionError => "admin.auth.error",
        }
    }
}

/// Local login strategy backed by the host's [`CredentialChecker`].
pub struct LocalStrategy {
    credentials: Arc<dyn CredentialChecker>,
}

impl LocalStrategy {
    #[must_use]
    pub fn new(credentials: Arc<dyn CredentialChecker>) -> Self {
        Self { credentials }
    }

    /// Check `identifier`/`secret` with the credential checker.
    ///
    /// The checker's outcome is returned as-is: a verdict keeps its user and
    /// info, a failure is the checker's own error value.
    ///
    /// # Errors
    ///
    /// Returns the [`CredentialError`] produced by the checker.
    pub async fn authenticate(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<CredentialVerdict, CredentialError> {
        let result = self.credentials.check_credentials(identifier, secret).await;

        match &result {
            Ok(CredentialVerdict::Accepted { user, .. }) => {
                info!(
                    event = AuthEvent::ConnectionSuccess.as_str(),
                    strategy = LOCAL_STRATEGY_NAME,
                    user_id = %user.id,
                    "admin login succeeded"
                );
            }
            Ok(CredentialVerdict::Rejected { .. }) => {
                debug!(strategy = LOCAL_STRATEGY_NAME, "admin login rejected");
            }
            Err(e) => {
                warn!(
                    event = AuthEvent::ConnectionError.as_str(),
                    strategy = LOCAL_STRATEGY_NAME,
                    error = %e,
                    "admin credential check failed"
                );
            }
        }

        result
    }
}

impl Strategy for LocalStrategy {
    fn name(&self) -> &str {
        LOCAL_STRATEGY_NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Build the local strategy from the host's credential checker.
#[must_use]
pub fn create_local_strategy(host: &HostContext) -> Arc<LocalStrategy> {
    Arc::new(LocalStrategy::new(host.credentials().clone()))
}
