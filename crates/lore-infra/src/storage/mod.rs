//! Key-value store implementations - in-memory and JSON file.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::InMemoryStore;
