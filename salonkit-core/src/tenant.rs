//! Core multi-tenant types for SalonKit.

/// Prefix for tenant-scoped storage keys.
pub const TENANT_KEY_PREFIX: &str = "sk";

/// A simple tenant identifier.
/// One tenant is one salon account; the unit of data isolation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantId(pub String);

impl TenantId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Context carried with every SalonKit operation.
///
/// Passed into services and repositories so that all data access is
/// explicitly tenant-aware. A context without a tenant exists for
/// pre-login and admin reads only; tenant data must never be written
/// through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    tenant_id: Option<TenantId>,
}

impl TenantContext {
    /// Context scoped to one tenant.
    pub fn for_tenant<S: Into<String>>(tenant: S) -> Self {
        Self {
            tenant_id: Some(TenantId(tenant.into())),
        }
    }

    /// Context with no tenant (pre-login or admin session).
    pub fn unscoped() -> Self {
        Self { tenant_id: None }
    }

    pub fn tenant_id(&self) -> Option<&TenantId> {
        self.tenant_id.as_ref()
    }

    pub fn is_scoped(&self) -> bool {
        self.tenant_id.is_some()
    }

    /// Resolve the storage key for a logical resource name.
    ///
    /// With a tenant: `sk_<tenantId>_<resource>`, so no two tenants (and
    /// no two resources of one tenant) ever share a key. Without a
    /// tenant the bare resource name is returned - a deliberate fallback
    /// for unscoped reads, not a sanctioned write path.
    pub fn storage_key(&self, resource: &str) -> String {
        match &self.tenant_id {
            Some(id) => format!("{TENANT_KEY_PREFIX}_{}_{resource}", id.0),
            None => resource.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_keys_are_isolated_per_tenant() {
        let a = TenantContext::for_tenant("salon-a");
        let b = TenantContext::for_tenant("salon-b");
        assert_ne!(a.storage_key("clients"), b.storage_key("clients"));
        assert_eq!(a.storage_key("clients"), "sk_salon-a_clients");
    }

    #[test]
    fn scoped_keys_are_isolated_per_resource() {
        let ctx = TenantContext::for_tenant("salon-a");
        assert_ne!(ctx.storage_key("clients"), ctx.storage_key("ventes"));
    }

    #[test]
    fn unscoped_context_falls_back_to_bare_name() {
        let ctx = TenantContext::unscoped();
        assert_eq!(ctx.storage_key("clients"), "clients");
        assert!(!ctx.is_scoped());
    }
}
