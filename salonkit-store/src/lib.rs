//! salonkit-store: persistence layer for SalonKit.
//!
//! A synchronous key/value store (in-memory or a single JSON document on
//! disk) behind a facade that never fails its callers, plus the generic
//! tenant-scoped resource repository and the typed records for the seven
//! resource collections.
//!
//! The whole layer is partitioned by the key scheme in
//! [`salonkit_core::tenant`]; isolation between tenants depends on every
//! caller going through a [`TenantContext`](salonkit_core::TenantContext),
//! never on the backend itself.

pub mod collection;
pub mod file;
pub mod kv;
pub mod memory;
pub mod records;
pub mod resources;

pub use collection::TenantCollection;
pub use file::JsonFileBackend;
pub use kv::{KeyValueBackend, Storage, StoreError};
pub use memory::MemoryBackend;
pub use records::{
    Appointment, AppointmentStatus, Client, ClientStatus, Expense, PaymentMethod, Product, Sale,
    SaleItem, SaleItemKind, ServiceType, ServiceVisit,
};
