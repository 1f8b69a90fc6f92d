//! Page-level error types.

use thiserror::Error;

use crate::ports::{DocumentError, StorageError, TransportError};

/// Errors a page component reports for one user interaction.
///
/// None of these are fatal to the page; the component boundary turns them
/// into an inline message and the user may try again.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Submission did not come from a recognized control: {}", .0.as_deref().unwrap_or("<none>"))]
    InvalidSubmitter(Option<String>),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] TransportError),

    #[error("Response declared JSON but the body did not parse: {0}")]
    MalformedResponseBody(String),

    #[error("Unsupported content type: {}", .0.as_deref().unwrap_or("<absent>"))]
    UnsupportedContentType(Option<String>),

    #[error("Missing element: #{0}")]
    MissingElement(String),

    #[error("Submission cancelled")]
    Cancelled,

    #[error("Invalid origin: {0}")]
    InvalidOrigin(#[from] url::ParseError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DocumentError> for PageError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::MissingElement(id) => PageError::MissingElement(id),
        }
    }
}

impl PageError {
    /// Short text suitable for an inline message next to the form.
    pub fn user_message(&self) -> String {
        match self {
            PageError::InvalidSubmitter(_) => "Please use the sign in or register button.".to_string(),
            PageError::NetworkFailure(TransportError::Timeout(_)) => {
                "The college did not answer in time. Please try again.".to_string()
            }
            PageError::NetworkFailure(_) => {
                "Could not reach the college. Please check your connection and try again."
                    .to_string()
            }
            PageError::MalformedResponseBody(_) | PageError::UnsupportedContentType(_) => {
                "The college sent a reply we could not read.".to_string()
            }
            PageError::Cancelled => "Submission cancelled.".to_string(),
            other => other.to_string(),
        }
    }
}
