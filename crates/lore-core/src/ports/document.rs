use async_trait::async_trait;

/// CSS `display` values the components toggle between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Flex,
}

impl Display {
    pub fn as_str(&self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Flex => "flex",
        }
    }
}

/// Document trait - the slice of the page DOM the components touch.
///
/// Elements are addressed by their `id`. Attributes set through
/// `set_root_attribute` live on the document root (`<html>`).
#[async_trait]
pub trait Document: Send + Sync {
    /// Check whether an element with this id exists.
    async fn contains(&self, id: &str) -> bool;

    /// Current value of an input element, `None` if it does not exist.
    async fn input_value(&self, id: &str) -> Option<String>;

    /// Replace the children of one element with an HTML fragment.
    async fn set_inner_html(&self, id: &str, html: &str) -> Result<(), DocumentError>;

    /// Inner HTML of an element, `None` if it does not exist.
    async fn inner_html(&self, id: &str) -> Option<String>;

    /// Replace the children of one element with a single text node.
    async fn set_text(&self, id: &str, text: &str) -> Result<(), DocumentError>;

    async fn root_attribute(&self, name: &str) -> Option<String>;

    async fn set_root_attribute(&self, name: &str, value: &str);

    /// Ids of elements carrying `class`, in document order.
    async fn ids_with_class(&self, class: &str) -> Vec<String>;

    async fn set_display(&self, id: &str, display: Display) -> Result<(), DocumentError>;

    async fn add_class(&self, id: &str, class: &str) -> Result<(), DocumentError>;

    async fn remove_class(&self, id: &str, class: &str) -> Result<(), DocumentError>;
}

/// Document operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("Missing element: #{0}")]
    MissingElement(String),
}
