//! Logical resource names and unscoped storage keys.
//!
//! These strings are the persisted layout: changing one orphans every
//! record already stored under it, so they are kept exactly as the
//! first release wrote them (the French names come from there).

/// Per-tenant resource collections, used with [`TenantContext::storage_key`].
///
/// [`TenantContext::storage_key`]: crate::tenant::TenantContext::storage_key
pub const CLIENTS: &str = "clients";
pub const SERVICE_VISITS: &str = "prestations";
pub const SERVICE_TYPES: &str = "types_prestations";
pub const PRODUCTS: &str = "produits";
pub const SALES: &str = "ventes";
pub const EXPENSES: &str = "depenses";
pub const APPOINTMENTS: &str = "rendez_vous";

/// Unscoped, admin-level keys. Never resolved through a tenant context.
pub const ADMIN_KEY: &str = "salonkit_admin";
pub const ACCOUNTS_KEY: &str = "salonkit_salons_accounts";
pub const SESSION_KEY: &str = "salonkit_session";
