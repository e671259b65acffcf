//! salonkit-core: framework-agnostic core for SalonKit.
//!
//! Everything here is deliberately backend-neutral: the tenant context,
//! the storage-key scheme, the error carrier and the service contract.
//! Storage backends live in `salonkit-store`, authentication in
//! `salonkit-auth`.

pub mod errors;
pub mod keys;
pub mod service;
pub mod tenant;

pub use errors::{ErrorKind, SalonError, SalonResult};
pub use service::{Record, TenantService};
pub use tenant::{TenantContext, TenantId};
