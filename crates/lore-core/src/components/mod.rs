//! Page components - each owns its state and reaches the page only through ports.

mod form_submitter;
mod slide_viewer;
mod theme_preference;

#[cfg(test)]
mod test_support;

pub use form_submitter::{
    FormIds, FormSubmitter, REQUEST_ID_HEADER, SubmissionOutcome, SubmitEvent, SubmitterConfig,
};
pub use slide_viewer::{FULLSCREEN_CLASS, ImageZoom, SLIDE_CLASS, SlideViewer, ZoomState};
pub use theme_preference::{ThemeConfig, ThemePreference};
