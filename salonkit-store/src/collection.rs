//! The generic tenant resource repository.

use std::marker::PhantomData;

use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use salonkit_core::{Record, SalonError, TenantContext, TenantService};

use crate::kv::Storage;

/// One tenant-scoped resource collection (clients, sales, expenses, ...).
///
/// The storage unit is the whole list: every mutation is a
/// load-all / transform / save-all round-trip, last write wins. That is
/// O(n) per mutation and unsafe under concurrent writers - accepted,
/// because the system assumes a single active session per tenant.
///
/// The collection itself is stateless: each call re-reads storage under
/// the key resolved from the [`TenantContext`] it was given, so
/// switching the active tenant can never leak the previous tenant's
/// records.
pub struct TenantCollection<T> {
    resource: String,
    storage: Storage,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TenantCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(resource: impl Into<String>, storage: Storage) -> Self {
        Self {
            resource: resource.into(),
            storage,
            _marker: PhantomData,
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Read the full collection, or `fallback` when nothing is stored
    /// yet (first run for this tenant).
    pub fn load_all(&self, ctx: &TenantContext, fallback: Vec<T>) -> Vec<T> {
        let key = ctx.storage_key(&self.resource);
        self.storage.get(&key, fallback)
    }

    /// Full overwrite write-back of the collection.
    pub fn save_all(&self, ctx: &TenantContext, items: &[T]) {
        let key = ctx.storage_key(&self.resource);
        self.storage.set(&key, &items);
    }
}

#[async_trait]
impl<T> TenantService<T> for TenantCollection<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    async fn find(&self, ctx: &TenantContext) -> Result<Vec<T>> {
        Ok(self.load_all(ctx, Vec::new()))
    }

    async fn get(&self, ctx: &TenantContext, id: &str) -> Result<T> {
        // Linear lookup; a dangling reference resolves to NotFound,
        // never a panic (no referential integrity at this layer).
        self.load_all(ctx, Vec::new())
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| {
                SalonError::not_found(format!("{}/{id} not found", self.resource)).into_anyhow()
            })
    }

    async fn create(&self, ctx: &TenantContext, mut data: T) -> Result<T> {
        if data.id().is_empty() {
            data.set_id(Uuid::new_v4().to_string());
        }

        let mut items = self.load_all(ctx, Vec::new());
        items.push(data.clone());
        self.save_all(ctx, &items);
        Ok(data)
    }

    async fn update(&self, ctx: &TenantContext, id: &str, mut data: T) -> Result<T> {
        let mut items = self.load_all(ctx, Vec::new());
        let pos = items.iter().position(|r| r.id() == id).ok_or_else(|| {
            SalonError::not_found(format!("{}/{id} not found", self.resource)).into_anyhow()
        })?;

        // Ids are immutable; a replace keeps the addressed id.
        data.set_id(id.to_string());
        items[pos] = data.clone();
        self.save_all(ctx, &items);
        Ok(data)
    }

    async fn remove(&self, ctx: &TenantContext, id: &str) -> Result<T> {
        let mut items = self.load_all(ctx, Vec::new());
        let pos = items.iter().position(|r| r.id() == id).ok_or_else(|| {
            SalonError::not_found(format!("{}/{id} not found", self.resource)).into_anyhow()
        })?;

        let removed = items.remove(pos);
        self.save_all(ctx, &items);
        Ok(removed)
    }
}
