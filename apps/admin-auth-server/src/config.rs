//! Server configuration: admin auth settings plus development accounts.

use std::path::Path;

use admin_auth::AdminAuthConfig;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;
use serde::de::IgnoredAny;

const ENV_PREFIX: &str = "ADMIN_AUTH_SERVER__";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub admin_auth: AdminAuthConfig,

    /// Accounts accepted by the local strategy.
    pub accounts: Vec<AccountConfig>,
}

/// Top-level layout. The `admin_auth` section is extracted by the module itself.
#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Sections {
    #[serde(rename = "admin_auth")]
    _admin_auth: Option<IgnoredAny>,
    accounts: Vec<AccountConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountConfig {
    pub identifier: String,
    pub secret: String,
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl AppConfig {
    /// Load from YAML, overridden by `ADMIN_AUTH_SERVER__*` environment variables.
    ///
    /// # Errors
    ///
    /// Fails if the merged configuration has unknown sections or either
    /// section does not match its shape.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let figment = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let sections: Sections = figment.extract()?;
        let admin_auth = AdminAuthConfig::from_figment(&figment.focus("admin_auth"))?;

        Ok(Self {
            admin_auth,
            accounts: sections.accounts,
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn loads_sections_from_yaml() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "server.yaml",
                r#"
admin_auth:
  providers:
    - uid: "github"
      factory: "redirect_sso"
accounts:
  - identifier: "root@example.com"
    secret: "toor"
    user_id: "7"
"#,
            )?;

            let cfg = AppConfig::load(Path::new("server.yaml"))
                .map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(cfg.admin_auth.providers.len(), 1);
            assert_eq!(cfg.accounts.len(), 1);
            assert_eq!(cfg.accounts[0].user_id, "7");
            assert!(cfg.accounts[0].email.is_none());
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_callback_template() {
        figment::Jail::expect_with(|jail| {
            jail.set_env(
                "ADMIN_AUTH_SERVER__ADMIN_AUTH__CALLBACK_URL_TEMPLATE",
                "/sso/{{provider}}",
            );

            let cfg = AppConfig::load(Path::new("absent.yaml"))
                .map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(cfg.admin_auth.callback_urls().build("okta"), "/sso/okta");
            assert!(cfg.accounts.is_empty());
            Ok(())
        });
    }

    #[test]
    fn unknown_sections_and_bad_providers_are_rejected() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("extra.yaml", "sessions: {}\n")?;
            assert!(AppConfig::load(Path::new("extra.yaml")).is_err());

            jail.create_file(
                "bad.yaml",
                r#"
admin_auth:
  providers:
    - uid: "github"
"#,
            )?;
            let err = AppConfig::load(Path::new("bad.yaml")).unwrap_err();
            assert!(err.to_string().contains("admin_auth configuration"));
            Ok(())
        });
    }
}
