//! Type-safe key-value persistence for the Carryon storefront.
//!
//! Plays the role browser local storage plays for a web storefront: a small
//! set of string keys, each holding one JSON blob, durable across runs.
//!
//! # Example
//!
//! ```rust,ignore
//! use carryon_storage::{Cache, DirStore};
//!
//! let cache = Cache::new(DirStore::open(".carryon")?);
//!
//! // Store a value
//! cache.set("cart", &entries)?;
//!
//! // Retrieve a value
//! let entries: Option<Vec<CartEntry>> = cache.get("cart")?;
//!
//! // Delete a value
//! cache.delete("cart")?;
//! ```

mod error;
mod kv;

pub use error::StorageError;
pub use kv::{Cache, DirStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, DirStore, KvStore, MemoryStore, StorageError};
}
