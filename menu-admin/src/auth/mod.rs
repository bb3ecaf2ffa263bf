//! Authentication and admin gating
//!
//! Sessions are delegated to an external identity provider; the core
//! only consumes its push-based user stream and compares the signed-in
//! email against the `settings/admin` allow-list document.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::store::{DocPath, DocumentStore, StoreResult};

/// Signed-in account as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl AuthUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            display_name: None,
        }
    }
}

/// External identity provider capability
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Push notification of the current user (present/absent).
    ///
    /// The receiver always holds the latest auth state.
    fn watch_user(&self) -> watch::Receiver<Option<AuthUser>>;

    async fn sign_in(&self) -> StoreResult<AuthUser>;

    async fn sign_out(&self) -> StoreResult<()>;
}

/// Gates admin features on the allow-list document
pub struct AdminGate {
    provider: Arc<dyn IdentityProvider>,
    store: Arc<dyn DocumentStore>,
}

impl AdminGate {
    pub fn new(provider: Arc<dyn IdentityProvider>, store: Arc<dyn DocumentStore>) -> Self {
        Self { provider, store }
    }

    /// Latest auth state pushed by the provider
    pub fn current_user(&self) -> Option<AuthUser> {
        self.provider.watch_user().borrow().clone()
    }

    /// True iff a user is signed in and their email appears in the
    /// `settings/admin` document's `ownerEmail` value.
    ///
    /// An absent document, a read failure, or a signed-out user all
    /// gate to false.
    pub async fn is_admin(&self) -> bool {
        let Some(user) = self.current_user() else {
            return false;
        };
        match self.store.get(&DocPath::settings("admin")).await {
            Ok(Some(doc)) => doc
                .get("ownerEmail")
                .and_then(|owners| owners.as_str())
                .map(|owners| owners.contains(&user.email))
                .unwrap_or(false),
            Ok(None) => false,
            Err(error) => {
                tracing::warn!(error = %error, "Failed to read admin allow-list");
                false
            }
        }
    }
}
