//! Document implementations.

mod memory;

pub use memory::{Element, InMemoryDocument};
