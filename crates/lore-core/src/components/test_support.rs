//! Fakes for component tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::{
    Display, Document, DocumentError, HttpTransport, KeyValueStore, PostRequest, RawResponse,
    StorageError, TransportError,
};

#[derive(Default, Clone)]
pub struct FakeElement {
    pub value: Option<String>,
    pub html: String,
    pub display: Option<Display>,
    pub classes: Vec<String>,
}

#[derive(Default)]
pub struct FakeDocument {
    order: RwLock<Vec<String>>,
    elements: RwLock<HashMap<String, FakeElement>>,
    root: RwLock<HashMap<String, String>>,
}

impl FakeDocument {
    pub fn login_page(user_name: &str, password: &str) -> Self {
        let doc = Self::default();
        doc.insert("uname", FakeElement {
            value: Some(user_name.to_string()),
            ..Default::default()
        });
        doc.insert("password", FakeElement {
            value: Some(password.to_string()),
            ..Default::default()
        });
        for id in ["sign_in_button", "register_button", "response", "form_error"] {
            doc.insert(id, FakeElement::default());
        }
        doc
    }

    pub fn insert(&self, id: &str, element: FakeElement) {
        self.order.try_write().unwrap().push(id.to_string());
        self.elements
            .try_write()
            .unwrap()
            .insert(id.to_string(), element);
    }

    pub fn remove(&self, id: &str) {
        self.order.try_write().unwrap().retain(|known| known != id);
        self.elements.try_write().unwrap().remove(id);
    }

    pub async fn element(&self, id: &str) -> Option<FakeElement> {
        self.elements.read().await.get(id).cloned()
    }

    async fn with_element<F>(&self, id: &str, f: F) -> Result<(), DocumentError>
    where
        F: FnOnce(&mut FakeElement),
    {
        let mut elements = self.elements.write().await;
        let element = elements
            .get_mut(id)
            .ok_or_else(|| DocumentError::MissingElement(id.to_string()))?;
        f(element);
        Ok(())
    }
}

#[async_trait]
impl Document for FakeDocument {
    async fn contains(&self, id: &str) -> bool {
        self.elements.read().await.contains_key(id)
    }

    async fn input_value(&self, id: &str) -> Option<String> {
        self.elements.read().await.get(id)?.value.clone()
    }

    async fn set_inner_html(&self, id: &str, html: &str) -> Result<(), DocumentError> {
        self.with_element(id, |el| el.html = html.to_string()).await
    }

    async fn inner_html(&self, id: &str) -> Option<String> {
        self.elements.read().await.get(id).map(|el| el.html.clone())
    }

    async fn set_text(&self, id: &str, text: &str) -> Result<(), DocumentError> {
        self.with_element(id, |el| el.html = text.to_string()).await
    }

    async fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.read().await.get(name).cloned()
    }

    async fn set_root_attribute(&self, name: &str, value: &str) {
        self.root
            .write()
            .await
            .insert(name.to_string(), value.to_string());
    }

    async fn ids_with_class(&self, class: &str) -> Vec<String> {
        let order = self.order.read().await;
        let elements = self.elements.read().await;
        order
            .iter()
            .filter(|id| {
                elements
                    .get(id.as_str())
                    .is_some_and(|el| el.classes.iter().any(|c| c == class))
            })
            .cloned()
            .collect()
    }

    async fn set_display(&self, id: &str, display: Display) -> Result<(), DocumentError> {
        self.with_element(id, |el| el.display = Some(display)).await
    }

    async fn add_class(&self, id: &str, class: &str) -> Result<(), DocumentError> {
        self.with_element(id, |el| {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        })
        .await
    }

    async fn remove_class(&self, id: &str, class: &str) -> Result<(), DocumentError> {
        self.with_element(id, |el| el.classes.retain(|c| c != class))
            .await
    }
}

pub enum StubReply {
    Respond(RawResponse),
    Refuse,
}

/// Transport that records every request and answers with a canned reply.
pub struct StubTransport {
    reply: StubReply,
    delay: Option<Duration>,
    pub requests: Mutex<Vec<PostRequest>>,
}

impl StubTransport {
    pub fn responding(content_type: Option<&str>, body: &str) -> Self {
        Self {
            reply: StubReply::Respond(RawResponse {
                status: 200,
                content_type: content_type.map(str::to_string),
                body: body.to_string(),
            }),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn refusing() -> Self {
        Self {
            reply: StubReply::Refuse,
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        if let StubReply::Respond(response) = &mut self.reply {
            response.status = status;
        }
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<PostRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn post(&self, request: PostRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.reply {
            StubReply::Respond(response) => Ok(response.clone()),
            StubReply::Refuse => Err(TransportError::Connect("connection refused".to_string())),
        }
    }
}

#[derive(Default)]
pub struct FakeStore {
    pub entries: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl KeyValueStore for FakeStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
