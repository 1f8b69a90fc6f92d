//! # Lore Core
//!
//! The page layer of the College of Lore client: domain values, the ports the
//! page talks through (document, storage, HTTP), and the components built on
//! top of them. No I/O happens here; adapters live in `lore-infra`.

pub mod components;
pub mod domain;
pub mod error;
pub mod ports;

pub use error::PageError;
