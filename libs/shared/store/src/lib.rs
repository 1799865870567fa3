//! Key-value persistence behind the portal's local state.
//!
//! Every mutable local slot (session info, patient profile, appointment
//! queue) lives behind the [`Repository`] trait so the last-write-wins,
//! no-transactions caveat is confined to one adapter. `MemoryRepository`
//! backs tests; `FileRepository` backs a running instance.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileRepository;
pub use memory::MemoryRepository;

/// Well-known slot keys. Kept in one place so callers cannot drift on
/// spelling. The predecessor client persisted these camelCase
/// (`authToken`, `userInfo`); the snake_case spellings here are a
/// deliberate rename to match the rest of this store's schema.
pub mod keys {
    pub const AUTH_TOKEN: &str = "auth_token";
    pub const USER_INFO: &str = "user_info";
    pub const PATIENT_PROFILE: &str = "patient_profile";
    pub const APPOINTMENTS: &str = "appointments";
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage poisoned: {0}")]
    Poisoned(String),
}

/// Object-safe raw surface. Typed access goes through [`RepositoryExt`].
pub trait Repository: Send + Sync {
    fn get_raw(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn set_raw(&self, key: &str, value: Value) -> Result<(), StoreError>;
    fn delete(&self, key: &str) -> Result<(), StoreError>;
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

pub trait RepositoryExt: Repository {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get_raw(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        self.set_raw(key, serde_json::to_value(value)?)
    }
}

impl<R: Repository + ?Sized> RepositoryExt for R {}
