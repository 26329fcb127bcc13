//! In-memory backend for the pulse journal store.
//!
//! Both collections live for as long as the process does. Nothing is written
//! to disk.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MemoryStore;
