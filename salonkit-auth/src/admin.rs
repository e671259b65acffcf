//! The platform admin account.
//!
//! A singleton persisted under [`keys::ADMIN_KEY`], seeded with a fixed
//! default credential on first read (no write happens until the admin
//! record is explicitly changed).

use serde::{Deserialize, Serialize};

use salonkit_core::keys;
use salonkit_store::Storage;

use crate::hash::simple_hash;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@salonkit.app";
const DEFAULT_ADMIN_PASSWORD: &str = "admin2025";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub email: String,
    #[serde(rename = "motDePasse")]
    pub password_hash: String,
}

#[derive(Clone)]
pub struct AdminStore {
    storage: Storage,
}

impl AdminStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    fn default_admin() -> AdminUser {
        AdminUser {
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password_hash: simple_hash(DEFAULT_ADMIN_PASSWORD),
        }
    }

    pub fn get(&self) -> AdminUser {
        self.storage.get(keys::ADMIN_KEY, Self::default_admin())
    }

    pub fn verify(&self, email: &str, password: &str) -> bool {
        let admin = self.get();
        admin.email == email && admin.password_hash == simple_hash(password)
    }
}
