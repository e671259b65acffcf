use anyhow::Result;
use async_trait::async_trait;

use crate::errors::SalonError;
use crate::tenant::TenantContext;

/// A record that can be stored in a tenant collection.
///
/// Ids are opaque strings: generated once at creation time, never reused,
/// never mutated afterward. An empty id means "not yet created".
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// Core SalonKit service trait:
///
/// - `find`   → list all records of the tenant
/// - `get`    → fetch one by id
/// - `create` → create one (assigning an id)
/// - `update` → full replace by id
/// - `remove` → delete by id, returning the removed record
///
/// Every method takes a [`TenantContext`]; all data access is explicitly
/// tenant-aware. The local storage backend implements this today; a
/// network backend can implement it later without changing callers -
/// which is why the surface is async even though the current
/// implementation never suspends.
///
/// All methods default to "Method not implemented", so a service can
/// override only what it actually supports.
#[async_trait]
pub trait TenantService<R>: Send + Sync
where
    R: Send + 'static,
{
    /// Find all records visible to this tenant.
    async fn find(&self, _ctx: &TenantContext) -> Result<Vec<R>> {
        Err(SalonError::not_implemented("find").into_anyhow())
    }

    /// Get a single record by id.
    async fn get(&self, _ctx: &TenantContext, _id: &str) -> Result<R> {
        Err(SalonError::not_implemented("get").into_anyhow())
    }

    /// Create a new record.
    async fn create(&self, _ctx: &TenantContext, _data: R) -> Result<R> {
        Err(SalonError::not_implemented("create").into_anyhow())
    }

    /// Fully replace an existing record.
    async fn update(&self, _ctx: &TenantContext, _id: &str, _data: R) -> Result<R> {
        Err(SalonError::not_implemented("update").into_anyhow())
    }

    /// Remove an existing record, returning it.
    async fn remove(&self, _ctx: &TenantContext, _id: &str) -> Result<R> {
        Err(SalonError::not_implemented("remove").into_anyhow())
    }
}
