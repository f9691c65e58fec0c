//! Core library components.
//!
//! The encrypted store engine: key material, the cipher codec, the blob
//! store, the token model and the manager that ties them together.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod key;
pub mod manager;
pub mod store;
pub mod types;
