use std::sync::Arc;

use admin_auth_sdk::{AdminAuthError, Strategy, StrategyContext, StrategyFactory};
use tracing::debug;
use url::Url;

use super::strategy::RedirectSsoStrategy;
use crate::config::RedirectSsoOptions;

/// Factory behind the `redirect_sso` catalog entry.
pub struct RedirectSsoFactory;

impl RedirectSsoFactory {
    fn options(ctx: &StrategyContext<'_>) -> Result<RedirectSsoOptions, AdminAuthError> {
        if ctx.options().is_null() {
            return Err(invalid(ctx, "options with authorize_url are required"));
        }
        serde_json::from_value(ctx.options().clone()).map_err(|e| invalid(ctx, &e.to_string()))
    }
}

fn invalid(ctx: &StrategyContext<'_>, reason: &str) -> AdminAuthError {
    AdminAuthError::InvalidOptions {
        uid: ctx.uid().to_owned(),
        reason: reason.to_owned(),
    }
}

impl StrategyFactory for RedirectSsoFactory {
    fn create_strategy(
        &self,
        ctx: &StrategyContext<'_>,
    ) -> Result<Arc<dyn Strategy>, AdminAuthError> {
        let opts = Self::options(ctx)?;

        let authorize_url = Url::parse(&opts.authorize_url)
            .map_err(|e| invalid(ctx, &format!("authorize_url: {e}")))?;
        if !matches!(authorize_url.scheme(), "http" | "https") {
            return Err(invalid(ctx, "authorize_url must use http or https"));
        }

        let strategy = RedirectSsoStrategy {
            name: ctx.uid().to_owned(),
            display_name: opts.display_name.unwrap_or_else(|| ctx.uid().to_owned()),
            authorize_url,
            callback_url: ctx.host().callback_url(ctx.uid()),
        };
        debug!(
            uid = ctx.uid(),
            callback_url = %strategy.callback_url,
            "created redirect sso strategy"
        );
        Ok(Arc::new(strategy))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use admin_auth_sdk::{
        CredentialChecker, CredentialError, CredentialVerdict, HostContext, Provider,
    };
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

    fn host() -> HostContext {
        HostContext::new(Arc::new(NoCredentials))
    }

    fn build(uid: &str, options: serde_json::Value) -> Result<Arc<dyn Strategy>, AdminAuthError> {
        Provider::new(uid, Arc::new(RedirectSsoFactory))
            .with_options(options)
            .create_strategy(&host())
    }

    #[test]
    fn builds_strategy_with_callback_url() {
        let strategy = build(
            "github",
            json!({
                "authorize_url": "https://github.com/login/oauth/authorize",
                "display_name": "GitHub"
            }),
        )
        .unwrap();

        let sso = strategy
            .as_any()
            .downcast_ref::<RedirectSsoStrategy>()
            .unwrap();
        assert_eq!(sso.name(), "github");
        assert_eq!(sso.display_name(), "GitHub");
        assert_eq!(sso.authorize_url().host_str(), Some("github.com"));
        assert_eq!(sso.callback_url(), "/admin/connect/github/callback");
    }

    #[test]
    fn display_name_defaults_to_uid() {
        let strategy = build("okta", json!({"authorize_url": "https://corp.okta.com/oauth2/v1/authorize"}))
            .unwrap();
        let sso = strategy
            .as_any()
            .downcast_ref::<RedirectSsoStrategy>()
            .unwrap();
        assert_eq!(sso.display_name(), "okta");
    }

    #[test]
    fn missing_options_are_rejected() {
        let err = build("okta", serde_json::Value::Null).err().unwrap();
        assert!(matches!(err, AdminAuthError::InvalidOptions { ref uid, .. } if uid == "okta"));
    }

    #[test]
    fn malformed_url_is_rejected() {
        let err = build("okta", json!({"authorize_url": "not a url"}))
            .err()
            .unwrap();
        assert!(err.to_string().contains("authorize_url"));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = build("okta", json!({"authorize_url": "ftp://idp.example.com/auth"}))
            .err()
            .unwrap();
        assert_eq!(
            err,
            AdminAuthError::InvalidOptions {
                uid: "okta".to_owned(),
                reason: "authorize_url must use http or https".to_owned(),
            }
        );
    }
}
