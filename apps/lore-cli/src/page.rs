//! Pages the commands drive, modelled as in-memory documents.
//!
//! Element ids match the College of Lore templates.

use lore_core::components::{FormIds, SLIDE_CLASS};
use lore_infra::InMemoryDocument;
use lore_infra::document::Element;

pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// The login page with its form filled in.
pub fn login_page(user_name: &str, password: &str) -> InMemoryDocument {
    let ids = FormIds::default();

    layout()
        .with_element(ids.username, Element::input(user_name))
        .with_element(ids.password, Element::input(password))
        .with_element("sign_in_button", Element::container())
        .with_element("register_button", Element::container())
        .with_element(ids.error_region, Element::container())
        .with_element(ids.response_region, Element::container())
}

/// A wiki page with a slideshow of `slides` images.
pub fn wiki_page(slides: usize) -> InMemoryDocument {
    (0..slides).fold(layout(), |page, i| {
        page.with_element(slide_id(i), Element::container().with_class(SLIDE_CLASS))
    })
}

/// Any page: every template extends the layout carrying the theme toggle.
pub fn layout() -> InMemoryDocument {
    InMemoryDocument::new()
        .with_root_attribute("data-theme", "default")
        .with_element(THEME_TOGGLE_ID, Element::container())
}

pub fn slide_id(index: usize) -> String {
    format!("slide-{}", index)
}
