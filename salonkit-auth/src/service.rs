//! The login facade: credentials, subscription gate and session
//! creation in one place, so page-level callers only ever see a
//! `Session` or a reason.

use tracing::debug;

use salonkit_core::TenantContext;
use salonkit_store::Storage;

use crate::accounts::AccountStore;
use crate::admin::AdminStore;
use crate::session::{Session, SessionManager};
use crate::subscription;

/// Why a tenant login was refused. An expired subscription is a
/// distinct, expected state: the UI routes it to a dedicated "expired"
/// view instead of a generic failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("subscription expired")]
    SubscriptionExpired,
}

/// Auth surface consumed by the UI layer.
#[derive(Clone)]
pub struct AuthService {
    accounts: AccountStore,
    admin: AdminStore,
    sessions: SessionManager,
}

impl AuthService {
    /// All components share one storage handle, so the session and the
    /// accounts always live in the same store.
    pub fn new(storage: Storage) -> Self {
        Self {
            accounts: AccountStore::new(storage.clone()),
            admin: AdminStore::new(storage.clone()),
            sessions: SessionManager::new(storage),
        }
    }

    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Admin login. `None` on bad credentials.
    pub async fn login_admin(&self, email: &str, password: &str) -> Option<Session> {
        if !self.admin.verify(email, password) {
            return None;
        }
        let session = Session::admin(email);
        self.sessions.login(&session);
        Some(session)
    }

    /// Tenant login: credentials first, then the subscription gate.
    ///
    /// A successful login replaces any prior session silently. A gated
    /// login leaves the prior session untouched.
    pub async fn login_tenant(&self, email: &str, password: &str) -> Result<Session, LoginError> {
        let (account, user) = self
            .accounts
            .verify_login(email, password)
            .await
            .ok_or(LoginError::InvalidCredentials)?;

        if !subscription::is_active(&account) {
            debug!(tenant = %account.id, "login refused, subscription expired");
            return Err(LoginError::SubscriptionExpired);
        }

        let session = Session::tenant(&account, &user);
        self.sessions.login(&session);
        Ok(session)
    }

    pub fn logout(&self) {
        self.sessions.logout();
    }

    pub fn current_session(&self) -> Option<Session> {
        self.sessions.current()
    }

    /// The tenant context of the live session; unscoped when nobody is
    /// logged in or the session is an admin one.
    pub fn tenant_context(&self) -> TenantContext {
        self.sessions
            .current()
            .map(|s| s.tenant_context())
            .unwrap_or_else(TenantContext::unscoped)
    }
}
