pub mod json_backend;

use crate::errors::CatalogError;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Storage key the product collection snapshot is persisted under.
pub const STORAGE_KEY: &str = "product-storage";

/// Abstraction over key-value snapshot stores. Backends hold opaque strings;
/// what goes in them is decided by the caller.
pub trait SnapshotBackend {
    /// Reads the snapshot stored under `key`, `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>>;
    /// Writes (or replaces) the snapshot stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

pub use json_backend::JsonFileBackend;
