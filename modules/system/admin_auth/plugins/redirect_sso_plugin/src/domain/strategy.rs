use std::any::Any;

use admin_auth_sdk::Strategy;
use url::Url;

/// Strategy sending the administrator to an external identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectSsoStrategy {
    pub(crate) name: String,
    pub(crate) display_name: String,
    pub(crate) authorize_url: Url,
    pub(crate) callback_url: String,
}

impl RedirectSsoStrategy {
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn authorize_url(&self) -> &Url {
        &self.authorize_url
    }

    /// Admin path the identity provider redirects back to.
    #[must_use]
    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }
}

impl Strategy for RedirectSsoStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
