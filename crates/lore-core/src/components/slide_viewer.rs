//! Slideshow and image zoom for the wiki pages.

use std::sync::Arc;

use crate::domain::SlideCursor;
use crate::error::PageError;
use crate::ports::{Display, Document};

/// Class that marks slide elements.
pub const SLIDE_CLASS: &str = "slides";

/// Class applied to an enlarged image.
pub const FULLSCREEN_CLASS: &str = "fullscreen";

/// Shows exactly one slide of a gallery at a time.
pub struct SlideViewer {
    document: Arc<dyn Document>,
    slides: Vec<String>,
    cursor: SlideCursor,
}

impl SlideViewer {
    /// Collect the slides marked with `class`, hide them all, show the first.
    pub async fn mount(document: Arc<dyn Document>, class: &str) -> Result<Self, PageError> {
        let slides = document.ids_with_class(class).await;
        let cursor = SlideCursor::new(slides.len())
            .ok_or_else(|| PageError::MissingElement(format!(".{}", class)))?;

        for id in &slides {
            document.set_display(id, Display::None).await?;
        }
        document
            .set_display(&slides[cursor.index()], Display::Flex)
            .await?;

        tracing::debug!(slides = slides.len(), "Slide viewer mounted");

        Ok(Self {
            document,
            slides,
            cursor,
        })
    }

    pub fn current_index(&self) -> usize {
        self.cursor.index()
    }

    /// Id of the slide on display.
    pub fn current_slide(&self) -> &str {
        &self.slides[self.cursor.index()]
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Move `n` slides forward (negative: backward), wrapping around.
    pub async fn advance(&mut self, n: i64) -> Result<usize, PageError> {
        self.document
            .set_display(self.current_slide(), Display::None)
            .await?;
        self.cursor.advance(n);
        self.document
            .set_display(self.current_slide(), Display::Flex)
            .await?;

        Ok(self.cursor.index())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomState {
    #[default]
    Reduced,
    Enlarged,
}

/// Click-to-enlarge on a single image.
pub struct ImageZoom {
    document: Arc<dyn Document>,
    image_id: String,
    state: ZoomState,
}

impl ImageZoom {
    pub async fn mount(
        document: Arc<dyn Document>,
        image_id: impl Into<String>,
    ) -> Result<Self, PageError> {
        let image_id = image_id.into();
        if !document.contains(&image_id).await {
            return Err(PageError::MissingElement(image_id));
        }

        Ok(Self {
            document,
            image_id,
            state: ZoomState::Reduced,
        })
    }

    pub fn state(&self) -> ZoomState {
        self.state
    }

    /// Enlarge a reduced image, reduce an enlarged one.
    pub async fn click(&mut self) -> Result<ZoomState, PageError> {
        self.state = match self.state {
            ZoomState::Reduced => {
                self.document
                    .add_class(&self.image_id, FULLSCREEN_CLASS)
                    .await?;
                ZoomState::Enlarged
            }
            ZoomState::Enlarged => {
                self.document
                    .remove_class(&self.image_id, FULLSCREEN_CLASS)
                    .await?;
                ZoomState::Reduced
            }
        };

        Ok(self.state)
    }
}
