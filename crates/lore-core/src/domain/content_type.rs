/// Body kinds the form submitter knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    Html,
}

impl ContentKind {
    /// Classify a `Content-Type` header value.
    ///
    /// Only the media type essence counts; parameters such as `charset` are
    /// ignored and matching is case-insensitive. Structured `+json` types
    /// (e.g. `application/problem+json`) are JSON.
    pub fn classify(header: Option<&str>) -> Option<Self> {
        let essence = header?.split(';').next()?.trim().to_ascii_lowercase();

        match essence.as_str() {
            "application/json" => Some(ContentKind::Json),
            "text/html" => Some(ContentKind::Html),
            other if other.starts_with("application/") && other.ends_with("+json") => {
                Some(ContentKind::Json)
            }
            _ => None,
        }
    }
}
