//! Core library components.
//!
//! The dump pipeline: list secret names, fetch their latest values, write
//! them out. Each stage is a plain function over a [`service::SecretService`].

pub mod config;
pub mod constants;
pub mod domain;
pub mod fetcher;
pub mod lister;
pub mod service;
pub mod validation;
pub mod writer;
