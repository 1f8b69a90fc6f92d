//! HTTP transport implementations.

mod reqwest;

pub use self::reqwest::{ReqwestTransport, TransportConfig};
