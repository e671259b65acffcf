//! The single persisted session.
//!
//! Exactly one session exists at a time: logging in as a new identity
//! silently replaces the prior one. The manager is an injected
//! component over the shared storage, not ambient global state; the
//! singleton behavior comes from the single storage key.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use salonkit_core::{keys, TenantContext};
use salonkit_store::Storage;

use crate::accounts::{TenantAccount, TenantUser, UserRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "salon")]
    Tenant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "type")]
    pub kind: SessionKind,
    #[serde(rename = "salonId", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(rename = "userRole", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub user_role: Option<UserRole>,
    #[serde(rename = "userName", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub user_name: Option<String>,
    pub email: String,
    /// Milliseconds since the epoch, set at login.
    pub timestamp: i64,
}

impl Session {
    pub fn admin(email: impl Into<String>) -> Self {
        Self {
            kind: SessionKind::Admin,
            tenant_id: None,
            user_id: None,
            user_role: None,
            user_name: None,
            email: email.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn tenant(account: &TenantAccount, user: &TenantUser) -> Self {
        Self {
            kind: SessionKind::Tenant,
            tenant_id: Some(account.id.clone()),
            user_id: Some(user.id.clone()),
            user_role: Some(user.role),
            user_name: Some(user.name.clone()),
            email: user.email.clone(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// The tenant context this session grants: scoped for a tenant
    /// session, unscoped for admin.
    pub fn tenant_context(&self) -> TenantContext {
        match (&self.kind, &self.tenant_id) {
            (SessionKind::Tenant, Some(id)) => TenantContext::for_tenant(id.clone()),
            _ => TenantContext::unscoped(),
        }
    }
}

/// Persists the current login under [`keys::SESSION_KEY`].
///
/// Single-writer assumption: the UI thread is the only actor, and every
/// operation is one synchronous, atomic storage call.
#[derive(Clone)]
pub struct SessionManager {
    storage: Storage,
}

impl SessionManager {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Persist `session` as the current session, replacing any prior one.
    pub fn login(&self, session: &Session) {
        self.storage.set(keys::SESSION_KEY, session);
    }

    /// The persisted session, or `None` when absent or corrupt.
    pub fn current(&self) -> Option<Session> {
        self.storage.get(keys::SESSION_KEY, None)
    }

    /// Delete the persisted session entirely.
    pub fn logout(&self) {
        self.storage.remove(keys::SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_persists_and_logout_clears() {
        let manager = SessionManager::new(Storage::in_memory());
        assert_eq!(manager.current(), None);

        let session = Session::admin("admin@salonkit.app");
        manager.login(&session);
        assert_eq!(manager.current(), Some(session));

        manager.logout();
        assert_eq!(manager.current(), None);
    }

    #[test]
    fn a_new_login_replaces_the_previous_session() {
        let manager = SessionManager::new(Storage::in_memory());
        manager.login(&Session::admin("first@salonkit.app"));
        manager.login(&Session::admin("second@salonkit.app"));

        let current = manager.current().expect("session");
        assert_eq!(current.email, "second@salonkit.app");
    }

    #[test]
    fn admin_session_context_is_unscoped() {
        let session = Session::admin("admin@salonkit.app");
        assert!(!session.tenant_context().is_scoped());
    }
}
