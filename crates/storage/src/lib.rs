//! Key-value persistence for coursekit.
//!
//! This crate provides a small string-keyed storage interface with an
//! in-memory implementation and a single-file JSON implementation.

#![warn(missing_docs)]

pub mod trait_;
pub mod memory;
#[cfg(feature = "json")]
pub mod json_storage;

pub use trait_::{KeyValueStore, StorageError, Result};
pub use memory::MemoryStore;
#[cfg(feature = "json")]
pub use json_storage::JsonFileStore;
