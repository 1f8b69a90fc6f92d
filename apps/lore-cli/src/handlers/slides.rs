//! Slideshow command.

use std::sync::Arc;

use lore_core::components::{ImageZoom, SLIDE_CLASS, SlideViewer, ZoomState};

use crate::page;

/// Mount a gallery of `count` slides, take each step in turn, and report
/// where the viewer lands. With `zoom`, the final slide is clicked once.
pub async fn run(count: usize, steps: &[i64], zoom: bool) -> anyhow::Result<String> {
    let page = Arc::new(page::wiki_page(count));
    let mut viewer = SlideViewer::mount(page.clone(), SLIDE_CLASS).await?;

    let mut lines = vec![format!("start {}", position(&viewer))];
    for &step in steps {
        viewer.advance(step).await?;
        lines.push(format!("{:+} {}", step, position(&viewer)));
    }

    if zoom {
        let mut image = ImageZoom::mount(page, viewer.current_slide()).await?;
        let state = match image.click().await? {
            ZoomState::Enlarged => "enlarged",
            ZoomState::Reduced => "reduced",
        };
        lines.push(format!("{} {}", viewer.current_slide(), state));
    }

    Ok(lines.join("\n"))
}

fn position(viewer: &SlideViewer) -> String {
    format!(
        "{} ({}/{})",
        viewer.current_slide(),
        viewer.current_index() + 1,
        viewer.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_steps_wrap_both_ways() {
        let out = run(3, &[-1, 2, 3], false).await.unwrap();
        assert_eq!(
            out,
            "start slide-0 (1/3)\n-1 slide-2 (3/3)\n+2 slide-1 (2/3)\n+3 slide-1 (2/3)"
        );
    }

    #[tokio::test]
    async fn test_zoom_current_slide() {
        let out = run(2, &[1], true).await.unwrap();
        assert!(out.ends_with("slide-1 enlarged"));
    }

    #[tokio::test]
    async fn test_empty_gallery_fails() {
        assert!(run(0, &[], false).await.is_err());
    }
}
