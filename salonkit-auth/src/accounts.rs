//! Tenant accounts and their owner/staff users.
//!
//! The accounts collection is a single unscoped list under
//! [`keys::ACCOUNTS_KEY`]; it is an admin-level resource and is never
//! resolved through a tenant context. Serialized field names keep the
//! layout the first release persisted.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use salonkit_core::keys;
use salonkit_store::Storage;

use crate::hash::simple_hash;

/// Fixed billing defaults applied at account creation (FCFA / days).
pub const DEFAULT_SUBSCRIPTION_AMOUNT: f64 = 25_000.0;
pub const DEFAULT_SUBSCRIPTION_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "owner")]
    Owner,
    #[serde(rename = "staff")]
    Staff,
}

/// A user of one tenant. `tenant_id` is a lookup back-reference, not an
/// ownership pointer; the account's `users` list owns the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantUser {
    pub id: String,
    #[serde(rename = "tenantId")]
    pub tenant_id: String,
    #[serde(rename = "nom")]
    pub name: String,
    pub email: String,
    #[serde(rename = "motDePasse")]
    pub password_hash: String,
    pub role: UserRole,
    #[serde(rename = "telephone", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "dateCreation")]
    pub created_at: NaiveDate,
}

/// One salon account: the unit of data isolation.
///
/// `email` / `password_hash` on the account itself are the legacy owner
/// credential, kept for accounts created before the multi-user model;
/// `users` is the current model and always contains exactly one Owner
/// for accounts created here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantAccount {
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "proprietaire")]
    pub owner_name: String,
    #[serde(rename = "telephone")]
    pub phone: String,
    #[serde(rename = "adresse", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub address: Option<String>,
    pub email: String,
    #[serde(rename = "motDePasse")]
    pub password_hash: String,
    #[serde(rename = "dateCreation")]
    pub created_at: NaiveDate,
    #[serde(rename = "dernierPaiement")]
    pub last_payment_date: NaiveDate,
    #[serde(rename = "abonnementActif")]
    pub subscription_active: bool,
    #[serde(rename = "montantAbonnement")]
    pub subscription_amount: f64,
    #[serde(rename = "joursAbonnement")]
    pub subscription_days: u32,
    /// Absent on pre-migration data, hence the default.
    #[serde(default)]
    pub users: Vec<TenantUser>,
}

impl TenantAccount {
    pub fn owner(&self) -> Option<&TenantUser> {
        self.users.iter().find(|u| u.role == UserRole::Owner)
    }
}

/// Input for [`AccountStore::create`]. The password arrives in plain
/// text and is hashed exactly once.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub owner_name: String,
    pub phone: String,
    pub address: Option<String>,
    pub email: String,
    pub password: String,
    pub last_payment_date: NaiveDate,
}

/// Input for [`AccountStore::add_staff`].
#[derive(Debug, Clone)]
pub struct NewStaff {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

/// CRUD over the tenant accounts collection.
///
/// The surface is async for future backend compatibility; the current
/// implementation is synchronous storage underneath. Expected failures
/// (unknown tenant, duplicate email, bad credentials) are `None`/`false`
/// results, never errors.
#[derive(Clone)]
pub struct AccountStore {
    storage: Storage,
}

impl AccountStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    fn load(&self) -> Vec<TenantAccount> {
        self.storage.get(keys::ACCOUNTS_KEY, Vec::new())
    }

    fn save(&self, accounts: &[TenantAccount]) {
        self.storage.set(keys::ACCOUNTS_KEY, &accounts);
    }

    /// True when `email` is already taken by any user of any tenant, or
    /// by any account's legacy owner credential. Uniqueness is enforced
    /// here at mutation time only; storage itself has no constraint.
    fn email_taken(accounts: &[TenantAccount], email: &str) -> bool {
        accounts
            .iter()
            .any(|a| a.email == email || a.users.iter().any(|u| u.email == email))
    }

    /// Full read of the accounts collection (admin-level).
    pub async fn list(&self) -> Vec<TenantAccount> {
        self.load()
    }

    /// Create a salon account with its auto-created Owner user.
    pub async fn create(&self, input: NewAccount) -> TenantAccount {
        let mut accounts = self.load();

        let account_id = Uuid::new_v4().to_string();
        let today = Utc::now().date_naive();
        let password_hash = simple_hash(&input.password);

        let owner = TenantUser {
            id: Uuid::new_v4().to_string(),
            tenant_id: account_id.clone(),
            name: input.owner_name.clone(),
            email: input.email.clone(),
            password_hash: password_hash.clone(),
            role: UserRole::Owner,
            phone: Some(input.phone.clone()),
            created_at: today,
        };

        let account = TenantAccount {
            id: account_id,
            name: input.name,
            owner_name: input.owner_name,
            phone: input.phone,
            address: input.address,
            email: input.email,
            password_hash,
            created_at: today,
            last_payment_date: input.last_payment_date,
            subscription_active: true,
            subscription_amount: DEFAULT_SUBSCRIPTION_AMOUNT,
            subscription_days: DEFAULT_SUBSCRIPTION_DAYS,
            users: vec![owner],
        };

        accounts.push(account.clone());
        self.save(&accounts);
        account
    }

    /// Add a staff user to a tenant.
    ///
    /// Returns `None` when the tenant does not exist or the email
    /// collides with any existing user anywhere in the system.
    pub async fn add_staff(&self, tenant_id: &str, input: NewStaff) -> Option<TenantUser> {
        let mut accounts = self.load();

        if Self::email_taken(&accounts, &input.email) {
            debug!(email = %input.email, "staff email already in use");
            return None;
        }

        let account = accounts.iter_mut().find(|a| a.id == tenant_id)?;

        let user = TenantUser {
            id: Uuid::new_v4().to_string(),
            tenant_id: tenant_id.to_string(),
            name: input.name,
            email: input.email,
            password_hash: simple_hash(&input.password),
            role: UserRole::Staff,
            phone: input.phone,
            created_at: Utc::now().date_naive(),
        };

        account.users.push(user.clone());
        self.save(&accounts);
        Some(user)
    }

    /// Remove a staff user. Owners are never removed, regardless of id
    /// match.
    ///
    /// Returns `true` only when a non-owner user was actually removed
    /// (missing tenant, unknown id and owner-targeting calls all return
    /// `false`).
    pub async fn remove_staff(&self, tenant_id: &str, user_id: &str) -> bool {
        let mut accounts = self.load();
        let Some(account) = accounts.iter_mut().find(|a| a.id == tenant_id) else {
            return false;
        };

        let before = account.users.len();
        account
            .users
            .retain(|u| u.role == UserRole::Owner || u.id != user_id);
        let removed = account.users.len() < before;

        self.save(&accounts);
        removed
    }

    /// Record a payment: last payment date becomes today and the
    /// account is re-activated. No-op when the tenant is unknown.
    pub async fn renew_subscription(&self, tenant_id: &str) {
        let mut accounts = self.load();
        if let Some(account) = accounts.iter_mut().find(|a| a.id == tenant_id) {
            account.last_payment_date = Utc::now().date_naive();
            account.subscription_active = true;
            self.save(&accounts);
        }
    }

    /// Admin toggle of the subscription flag. No-op when unknown.
    pub async fn set_active(&self, tenant_id: &str, active: bool) {
        let mut accounts = self.load();
        if let Some(account) = accounts.iter_mut().find(|a| a.id == tenant_id) {
            account.subscription_active = active;
            self.save(&accounts);
        }
    }

    /// Verify a tenant-user login.
    ///
    /// Hashes the password once, then scans tenants in storage order:
    /// the users list first (owner or staff), then the account's legacy
    /// owner credential, for which a transient Owner view is
    /// synthesized. First match wins.
    pub async fn verify_login(
        &self,
        email: &str,
        password: &str,
    ) -> Option<(TenantAccount, TenantUser)> {
        let hashed = simple_hash(password);

        for account in self.load() {
            if let Some(user) = account
                .users
                .iter()
                .find(|u| u.email == email && u.password_hash == hashed)
            {
                let user = user.clone();
                return Some((account, user));
            }

            if account.email == email && account.password_hash == hashed {
                let user = Self::legacy_owner_view(&account);
                return Some((account, user));
            }
        }

        None
    }

    /// One-shot migration: materialize an Owner user for every account
    /// that predates the multi-user model. Returns how many accounts
    /// were migrated. Running it twice is a no-op; `verify_login` keeps
    /// working before and after.
    pub async fn migrate_legacy_accounts(&self) -> usize {
        let mut accounts = self.load();
        let mut migrated = 0;

        for account in accounts.iter_mut() {
            if account.users.is_empty() {
                let mut owner = Self::legacy_owner_view(account);
                owner.id = Uuid::new_v4().to_string();
                account.users.push(owner);
                migrated += 1;
            }
        }

        if migrated > 0 {
            debug!(migrated, "materialized owners for legacy accounts");
            self.save(&accounts);
        }
        migrated
    }

    /// Owner-role view of an account's legacy credential. Not persisted
    /// by `verify_login`; `migrate_legacy_accounts` persists a copy with
    /// a fresh id.
    fn legacy_owner_view(account: &TenantAccount) -> TenantUser {
        TenantUser {
            id: account.id.clone(),
            tenant_id: account.id.clone(),
            name: account.owner_name.clone(),
            email: account.email.clone(),
            password_hash: account.password_hash.clone(),
            role: UserRole::Owner,
            phone: Some(account.phone.clone()),
            created_at: account.created_at,
        }
    }
}
