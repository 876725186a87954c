//! Development credential checker backed by configured accounts.

use std::collections::HashMap;

use admin_auth_sdk::{AdminUser, CredentialChecker, CredentialError, CredentialVerdict};
use async_trait::async_trait;
use serde_json::json;

use crate::config::AccountConfig;

/// Compares secrets as given. Password hashing belongs to the host's real
/// authentication service.
pub struct StaticCredentialChecker {
    accounts: HashMap<String, AccountConfig>,
}

impl StaticCredentialChecker {
    #[must_use]
    pub fn new(accounts: &[AccountConfig]) -> Self {
        Self {
            accounts: accounts
                .iter()
                .map(|a| (a.identifier.clone(), a.clone()))
                .collect(),
        }
    }
}

fn rejected(message: &str) -> CredentialVerdict {
    CredentialVerdict::Rejected {
        info: Some(json!({ "message": message })),
    }
}

#[async_trait]
impl CredentialChecker for StaticCredentialChecker {
    async fn check_credentials(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<CredentialVerdict, CredentialError> {
        if identifier.is_empty() || secret.is_empty() {
            return Ok(rejected("Missing credentials"));
        }

        let Some(account) = self.accounts.get(identifier) else {
            return Ok(rejected("Invalid credentials"));
        };
        if account.secret != secret {
            return Ok(rejected("Invalid credentials"));
        }

        Ok(CredentialVerdict::Accepted {
            user: AdminUser {
                id: account.user_id.clone(),
                email: account.email.clone(),
            },
            info: None,
        })
    }
}
