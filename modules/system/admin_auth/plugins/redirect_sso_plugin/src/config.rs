//! Provider options for redirect SSO strategies.

use serde::Deserialize;

/// Options of a single `redirect_sso` provider entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedirectSsoOptions {
    /// Identity provider authorization endpoint (absolute URL).
    pub authorize_url: String,

    /// Label shown on the admin login page. Defaults to the provider uid.
    #[serde(default)]
    pub display_name: Option<String>,
}
