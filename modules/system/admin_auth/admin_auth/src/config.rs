//! Configuration for the admin authentication module.

use admin_auth_sdk::{CALLBACK_URL_TEMPLATE, CallbackUrlBuilder};
use figment::Figment;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Module configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminAuthConfig {
    /// External providers, registered in this order.
    pub providers: Vec<ProviderConfig>,

    /// Callback path template; `{{provider}}` is replaced by the provider uid.
    pub callback_url_template: String,
}

impl Default for AdminAuthConfig {
    fn default() -> Self {
        Self {
            providers: Vec::new(),
            callback_url_template: CALLBACK_URL_TEMPLATE.to_owned(),
        }
    }
}

/// A single provider entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Unique provider name, also used as the strategy name.
    pub uid: String,

    /// Name of the strategy factory in the catalog.
    pub factory: String,

    /// Provider-specific settings handed to the factory.
    #[serde(default)]
    pub options: Value,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load admin_auth configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

impl AdminAuthConfig {
    /// Extract from a figment assembled by the host, typically focused on
    /// the host's `admin_auth` section. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if extraction fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(|e| ConfigError::Load(Box::new(e)))
    }

    #[must_use]
    pub fn callback_urls(&self) -> CallbackUrlBuilder {
        CallbackUrlBuilder::new(self.callback_url_template.clone())
    }
}
