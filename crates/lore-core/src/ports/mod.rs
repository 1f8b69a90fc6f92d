//! Ports - trait definitions for the page's external collaborators.
//! Adapters in `lore-infra` implement these.

mod document;
mod storage;
mod transport;

pub use document::{Display, Document, DocumentError};
pub use storage::{KeyValueStore, StorageError};
pub use transport::{HttpTransport, PostRequest, RawResponse, TransportError};
