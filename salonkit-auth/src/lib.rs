//! salonkit-auth: accounts, sessions and subscription gating.
//!
//! Tenant (salon) accounts with an owner + staff user model, the single
//! persisted session, the subscription gate, and the login facade that
//! ties them together. All state lives behind the storage facade from
//! `salonkit-store`; swapping that for a network backend leaves this
//! crate's surface unchanged.

pub mod accounts;
pub mod admin;
pub mod hash;
pub mod service;
pub mod session;
pub mod subscription;

pub use accounts::{AccountStore, NewAccount, NewStaff, TenantAccount, TenantUser, UserRole};
pub use admin::{AdminStore, AdminUser};
pub use hash::simple_hash;
pub use service::{AuthService, LoginError};
pub use session::{Session, SessionKind, SessionManager};
