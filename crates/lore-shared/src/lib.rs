//! # Lore Shared
//!
//! Wire types shared between the page client and the College of Lore server.

pub mod dto;
pub mod response;

pub use dto::Credentials;
pub use response::{DataReply, ErrorCode, ErrorReply, ServerReply, status_message};
