//! Command handlers, one module per page component.

pub mod auth;
pub mod slides;
pub mod theme;
