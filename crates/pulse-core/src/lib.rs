//! Core types and trait definitions for the pulse signup-and-journal backend.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! All other crates depend on it.

pub mod email;
pub mod error;
pub mod mood;
pub mod signup;
pub mod store;

pub use error::{Error, Result};
