//! In-memory document - a flat model of the page elements the components use.
//!
//! Used by the CLI to drive components outside a browser, and by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use lore_core::ports::{Display, Document, DocumentError};

/// One addressable element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Form value, `Some` only for inputs.
    pub value: Option<String>,
    pub html: String,
    pub display: Option<Display>,
    pub classes: Vec<String>,
}

impl Element {
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn container() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Page held in memory. Elements keep their insertion order.
#[derive(Default)]
pub struct InMemoryDocument {
    elements: RwLock<Vec<(String, Element)>>,
    root: RwLock<HashMap<String, String>>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element; an existing element with the same id is replaced in place.
    pub fn with_element(mut self, id: impl Into<String>, element: Element) -> Self {
        let id = id.into();
        let elements = self.elements.get_mut();
        match elements.iter_mut().find(|(known, _)| *known == id) {
            Some((_, existing)) => *existing = element,
            None => elements.push((id, element)),
        }
        self
    }

    pub fn with_root_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.root.get_mut().insert(name.into(), value.into());
        self
    }

    /// Snapshot of one element.
    pub async fn element(&self, id: &str) -> Option<Element> {
        let elements = self.elements.read().await;
        elements
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, el)| el.clone())
    }

    async fn update<F>(&self, id: &str, f: F) -> Result<(), DocumentError>
    where
        F: FnOnce(&mut Element),
    {
        let mut elements = self.elements.write().await;
        let (_, element) = elements
            .iter_mut()
            .find(|(known, _)| known == id)
            .ok_or_else(|| DocumentError::MissingElement(id.to_string()))?;
        f(element);
        Ok(())
    }
}

#[async_trait]
impl Document for InMemoryDocument {
    async fn contains(&self, id: &str) -> bool {
        self.element(id).await.is_some()
    }

    async fn input_value(&self, id: &str) -> Option<String> {
        self.element(id).await?.value
    }

    async fn set_inner_html(&self, id: &str, html: &str) -> Result<(), DocumentError> {
        self.update(id, |el| el.html = html.to_string()).await
    }

    async fn inner_html(&self, id: &str) -> Option<String> {
        self.element(id).await.map(|el| el.html)
    }

    async fn set_text(&self, id: &str, text: &str) -> Result<(), DocumentError> {
        let escaped = escape_text(text);
        self.update(id, |el| el.html = escaped).await
    }

    async fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.read().await.get(name).cloned()
    }

    async fn set_root_attribute(&self, name: &str, value: &str) {
        let mut root = self.root.write().await;
        root.insert(name.to_string(), value.to_string());
    }

    async fn ids_with_class(&self, class: &str) -> Vec<String> {
        let elements = self.elements.read().await;
        elements
            .iter()
            .filter(|(_, el)| el.has_class(class))
            .map(|(id, _)| id.clone())
            .collect()
    }

    async fn set_display(&self, id: &str, display: Display) -> Result<(), DocumentError> {
        self.update(id, |el| el.display = Some(display)).await
    }

    async fn add_class(&self, id: &str, class: &str) -> Result<(), DocumentError> {
        self.update(id, |el| {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        })
        .await
    }

    async fn remove_class(&self, id: &str, class: &str) -> Result<(), DocumentError> {
        self.update(id, |el| el.classes.retain(|c| c != class)).await
    }
}

// Text set through `set_text` must never be parsed as markup.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> InMemoryDocument {
        InMemoryDocument::new()
            .with_element("uname", Element::input("ilse"))
            .with_element("response", Element::container())
            .with_element("slide-a", Element::container().with_class("slides"))
            .with_element("plate", Element::container())
            .with_element("slide-b", Element::container().with_class("slides"))
    }

    #[tokio::test]
    async fn test_input_value_only_for_inputs() {
        let doc = page();
        assert_eq!(doc.input_value("uname").await.as_deref(), Some("ilse"));
        assert_eq!(doc.input_value("response").await, None);
        assert_eq!(doc.input_value("missing").await, None);
    }

    #[tokio::test]
    async fn test_class_lookup_keeps_document_order() {
        let doc = page();
        assert_eq!(
            doc.ids_with_class("slides").await,
            vec!["slide-a".to_string(), "slide-b".to_string()]
        );
    }

    #[tokio::test]
    async fn test_writes_to_missing_element_fail() {
        let doc = page();
        assert_eq!(
            doc.set_inner_html("nope", "<p>hi</p>").await,
            Err(DocumentError::MissingElement("nope".to_string()))
        );
        assert_eq!(
            doc.set_display("nope", Display::Flex).await,
            Err(DocumentError::MissingElement("nope".to_string()))
        );
    }

    #[tokio::test]
    async fn test_text_is_escaped_html_is_not() {
        let doc = page();
        doc.set_text("response", "<b>bold</b> & co").await.unwrap();
        assert_eq!(
            doc.inner_html("response").await.as_deref(),
            Some("&lt;b&gt;bold&lt;/b&gt; &amp; co")
        );

        doc.set_inner_html("response", "<p>hi</p>").await.unwrap();
        assert_eq!(doc.inner_html("response").await.as_deref(), Some("<p>hi</p>"));
    }

    #[tokio::test]
    async fn test_class_add_is_idempotent() {
        let doc = page();
        doc.add_class("plate", "fullscreen").await.unwrap();
        doc.add_class("plate", "fullscreen").await.unwrap();
        assert_eq!(
            doc.element("plate").await.unwrap().classes,
            vec!["fullscreen".to_string()]
        );
        doc.remove_class("plate", "fullscreen").await.unwrap();
        assert!(doc.element("plate").await.unwrap().classes.is_empty());
    }

    #[tokio::test]
    async fn test_root_attributes() {
        let doc = InMemoryDocument::new().with_root_attribute("data-theme", "default");
        assert_eq!(
            doc.root_attribute("data-theme").await.as_deref(),
            Some("default")
        );
        doc.set_root_attribute("data-theme", "light").await;
        assert_eq!(doc.root_attribute("data-theme").await.as_deref(), Some("light"));
    }
}
