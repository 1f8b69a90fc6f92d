//! Light/default theme toggle persisted in client-side storage.

use std::sync::Arc;

use crate::domain::Theme;
use crate::error::PageError;
use crate::ports::{Document, KeyValueStore};

/// Where the theme lives in the page and in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Storage key holding the chosen theme.
    pub storage_key: String,
    /// Attribute on the document root carrying the theme.
    pub attribute: String,
    /// Id of the toggle control.
    pub toggle_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "site-theme".to_string(),
            attribute: "data-theme".to_string(),
            toggle_id: "theme-toggle".to_string(),
        }
    }
}

pub struct ThemePreference {
    document: Arc<dyn Document>,
    store: Arc<dyn KeyValueStore>,
    config: ThemeConfig,
}

impl ThemePreference {
    /// Attach to a page. Fails if the toggle control is not on it.
    pub async fn mount(
        document: Arc<dyn Document>,
        store: Arc<dyn KeyValueStore>,
        config: ThemeConfig,
    ) -> Result<Self, PageError> {
        if !document.contains(&config.toggle_id).await {
            return Err(PageError::MissingElement(config.toggle_id));
        }

        Ok(Self {
            document,
            store,
            config,
        })
    }

    /// Re-apply the stored theme, if any. Returns the theme now active.
    pub async fn apply_initial(&self) -> Result<Theme, PageError> {
        if let Some(stored) = self.store.get(&self.config.storage_key).await? {
            match stored.parse::<Theme>() {
                Ok(theme) => {
                    self.document
                        .set_root_attribute(&self.config.attribute, theme.as_str())
                        .await;
                    tracing::debug!(theme = %theme, "Stored theme applied");
                }
                Err(e) => tracing::warn!(error = %e, "Ignoring stored theme"),
            }
        }

        Ok(self.current().await)
    }

    /// Theme currently on the root. No attribute, or one we do not know, is the default.
    pub async fn current(&self) -> Theme {
        self.document
            .root_attribute(&self.config.attribute)
            .await
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Switch default → light → default, persisting the choice.
    ///
    /// Light is stored; returning to default clears the key.
    pub async fn toggle(&self) -> Result<Theme, PageError> {
        let next = self.current().await.toggled();

        self.document
            .set_root_attribute(&self.config.attribute, next.as_str())
            .await;

        match next {
            Theme::Light => {
                self.store
                    .set(&self.config.storage_key, next.as_str())
                    .await?
            }
            Theme::Default => self.store.remove(&self.config.storage_key).await?,
        }

        tracing::info!(theme = %next, "Theme toggled");
        Ok(next)
    }
}
