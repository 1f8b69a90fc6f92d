//! Theme commands. Each run is a fresh page load followed by the action.

use std::sync::Arc;

use lore_core::components::{ThemeConfig, ThemePreference};

use crate::page;
use crate::state::AppState;

async fn load(state: &AppState) -> anyhow::Result<ThemePreference> {
    let page = Arc::new(page::layout());
    let theme = ThemePreference::mount(page, state.store.clone(), ThemeConfig::default()).await?;
    theme.apply_initial().await?;
    Ok(theme)
}

/// Theme a freshly loaded page ends up with.
pub async fn show(state: &AppState) -> anyhow::Result<String> {
    let theme = load(state).await?;
    Ok(theme.current().await.to_string())
}

/// Load a page, click the toggle once, report the new theme.
pub async fn toggle(state: &AppState) -> anyhow::Result<String> {
    let theme = load(state).await?;
    Ok(theme.toggle().await?.to_string())
}
