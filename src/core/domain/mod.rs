//! Domain types.
//!
//! Ordered collections passed between the pipeline stages.

mod secrets;

pub use secrets::{normalize_key, SecretNames, SecretValues};
