//! Domain values - the small pieces of state the page components reason about.

mod content_type;
mod endpoint;
mod slides;
mod theme;

pub use content_type::ContentKind;
pub use endpoint::Endpoint;
pub use slides::SlideCursor;
pub use theme::{Theme, UnknownTheme};
