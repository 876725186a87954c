#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use admin_auth::{
    AdminAuthConfig, BootstrapError, InitError, ProviderConfig, ProviderRegistry, Service,
    StrategyCatalog, StrategyTable,
};
use admin_auth_sdk::{CredentialChecker, CredentialError, CredentialVerdict, HostContext};
use redirect_sso_plugin::{FACTORY_NAME, RedirectSsoStrategy, register_redirect_sso};
use serde_json::json;

struct NoCredentials;

#[async_trait::async_trait]
impl CredentialChecker for NoCredentials {
    async fn check_credentials(
        &self,
        _identifier: &str,
        _secret: &str,
    ) -> Result<CredentialVerdict, CredentialError> {
        Err(CredentialError::new("unavailable"))
    }
}

fn service() -> Service {
    let mut catalog = StrategyCatalog::new();
    register_redirect_sso(&mut catalog);
    Service::new(
        Arc::new(ProviderRegistry::new()),
        catalog,
        HostContext::new(Arc::new(NoCredentials)),
    )
}

fn sso(uid: &str, options: serde_json::Value) -> ProviderConfig {
    ProviderConfig {
        uid: uid.to_owned(),
        factory: FACTORY_NAME.to_owned(),
        options,
    }
}

#[test]
fn configured_providers_become_redirect_strategies() {
    let cfg = AdminAuthConfig {
        providers: vec![
            sso("github", json!({"authorize_url": "https://github.com/login/oauth/authorize"})),
            sso("google", json!({"authorize_url": "https://accounts.google.com/o/oauth2/v2/auth"})),
        ],
        ..AdminAuthConfig::default()
    };
    let svc = service();
    let mut table = StrategyTable::new();

    svc.bootstrap(&cfg, &mut table).unwrap();

    assert_eq!(table.names(), vec!["github", "google", "local"]);
    let google = table
        .get("google")
        .and_then(|s| s.as_any().downcast_ref::<RedirectSsoStrategy>())
        .unwrap();
    assert_eq!(google.callback_url(), "/admin/connect/google/callback");
}

#[test]
fn bad_provider_options_abort_bootstrap() {
    let cfg = AdminAuthConfig {
        providers: vec![sso("github", json!({"authorize_url": "nope"}))],
        ..AdminAuthConfig::default()
    };
    let svc = service();
    let mut table = StrategyTable::new();

    let err = svc.bootstrap(&cfg, &mut table).unwrap_err();

    assert!(matches!(
        err,
        BootstrapError::Init(InitError::Strategy { ref uid, .. }) if uid == "github"
    ));
    assert!(table.is_empty());
    assert!(!table.is_active());
}
