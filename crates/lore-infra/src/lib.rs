//! # Lore Infrastructure
//!
//! Concrete implementations of the ports defined in `lore-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No network client, in-memory and file adapters only
//! - `http` - HTTP transport via reqwest

pub mod document;
pub mod storage;

#[cfg(feature = "http")]
pub mod transport;

// Re-exports
pub use document::InMemoryDocument;
pub use storage::{FileStore, InMemoryStore};

#[cfg(feature = "http")]
pub use transport::{ReqwestTransport, TransportConfig};
