//! Provider descriptors and the data exchanged with strategies.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{CredentialChecker, Strategy, StrategyFactory};
use crate::callback::CallbackUrlBuilder;
use crate::error::AdminAuthError;

/// Administrator identity returned by a successful credential check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AdminUser {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
        }
    }
}

/// Outcome of a credential check that ran to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum CredentialVerdict {
    /// Credentials matched `user`. `info` is passed through to the caller.
    Accepted { user: AdminUser, info: Option<Value> },
    /// Credentials did not match. `info` usually carries a user-facing message.
    Rejected { info: Option<Value> },
}

impl CredentialVerdict {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    #[must_use]
    pub fn user(&self) -> Option<&AdminUser> {
        match self {
            Self::Accepted { user, .. } => Some(user),
            Self::Rejected { .. } => None,
        }
    }

    #[must_use]
    pub fn info(&self) -> Option<&Value> {
        match self {
            Self::Accepted { info, .. } | Self::Rejected { info } => info.as_ref(),
        }
    }
}

/// Runtime context handed to strategy factories.
#[derive(Clone)]
pub struct HostContext {
    credentials: Arc<dyn CredentialChecker>,
    callbacks: CallbackUrlBuilder,
}

impl HostContext {
    #[must_use]
    pub fn new(credentials: Arc<dyn CredentialChecker>) -> Self {
        Self {
            credentials,
            callbacks: CallbackUrlBuilder::default(),
        }
    }

    #[must_use]
    pub fn with_callbacks(mut self, callbacks: CallbackUrlBuilder) -> Self {
        self.callbacks = callbacks;
        self
    }

    #[must_use]
    pub fn credentials(&self) -> &Arc<dyn CredentialChecker> {
        &self.credentials
    }

    #[must_use]
    pub fn callbacks(&self) -> &CallbackUrlBuilder {
        &self.callbacks
    }

    /// Callback path for the provider `uid`.
    #[must_use]
    pub fn callback_url(&self, uid: &str) -> String {
        self.callbacks.build(uid)
    }
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext")
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}

/// Everything a factory sees when building one provider's strategy.
#[derive(Debug, Clone, Copy)]
pub struct StrategyContext<'a> {
    uid: &'a str,
    options: &'a Value,
    host: &'a HostContext,
}

impl<'a> StrategyContext<'a> {
    #[must_use]
    pub fn new(uid: &'a str, options: &'a Value, host: &'a HostContext) -> Self {
        Self { uid, options, host }
    }

    #[must_use]
    pub fn uid(&self) -> &'a str {
        self.uid
    }

    #[must_use]
    pub fn options(&self) -> &'a Value {
        self.options
    }

    #[must_use]
    pub fn host(&self) -> &'a HostContext {
        self.host
    }
}

/// A named authentication method and the factory for its strategy.
///
/// Cloning is cheap: the factory is shared.
#[derive(Clone)]
pub struct Provider {
    uid: String,
    factory: Arc<dyn StrategyFactory>,
    options: Value,
}

impl Provider {
    #[must_use]
    pub fn new(uid: impl Into<String>, factory: Arc<dyn StrategyFactory>) -> Self {
        Self {
            uid: uid.into(),
            factory,
            options: Value::Null,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    #[must_use]
    pub fn options(&self) -> &Value {
        &self.options
    }

    #[must_use]
    pub fn factory(&self) -> &Arc<dyn StrategyFactory> {
        &self.factory
    }

    /// Build this provider's strategy.
    ///
    /// # Errors
    ///
    /// Propagates the factory's [`AdminAuthError`].
    pub fn create_strategy(&self, host: &HostContext) -> Result<Arc<dyn Strategy>, AdminAuthError> {
        let ctx = StrategyContext::new(&self.uid, &self.options, host);
        self.factory.create_strategy(&ctx)
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("uid", &self.uid)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
