//! Pre-configured collections, one per resource kind.
//!
//! Mirrors the per-resource API objects of the first release: callers
//! grab the collection for a kind and go through the generic repository.

use salonkit_core::keys;

use crate::collection::TenantCollection;
use crate::kv::Storage;
use crate::records::{
    Appointment, Client, Expense, Product, Sale, ServiceType, ServiceVisit,
};

pub fn clients(storage: Storage) -> TenantCollection<Client> {
    TenantCollection::new(keys::CLIENTS, storage)
}

pub fn service_visits(storage: Storage) -> TenantCollection<ServiceVisit> {
    TenantCollection::new(keys::SERVICE_VISITS, storage)
}

pub fn service_types(storage: Storage) -> TenantCollection<ServiceType> {
    TenantCollection::new(keys::SERVICE_TYPES, storage)
}

pub fn products(storage: Storage) -> TenantCollection<Product> {
    TenantCollection::new(keys::PRODUCTS, storage)
}

pub fn sales(storage: Storage) -> TenantCollection<Sale> {
    TenantCollection::new(keys::SALES, storage)
}

pub fn expenses(storage: Storage) -> TenantCollection<Expense> {
    TenantCollection::new(keys::EXPENSES, storage)
}

pub fn appointments(storage: Storage) -> TenantCollection<Appointment> {
    TenantCollection::new(keys::APPOINTMENTS, storage)
}
