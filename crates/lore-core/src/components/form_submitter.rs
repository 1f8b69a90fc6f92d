//! Login/register form submission.
//!
//! One submit event becomes at most one `POST` to `/login` or `/register`.
//! JSON replies come back to the caller as a typed outcome; HTML replies are
//! rendered into a dedicated response region instead of replacing the page.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use lore_shared::{Credentials, ServerReply};
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use crate::domain::{ContentKind, Endpoint};
use crate::error::PageError;
use crate::ports::{Document, HttpTransport, PostRequest, RawResponse, TransportError};

/// Header carrying a per-submission id, for correlating client and server logs.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Element ids the submitter reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormIds {
    pub username: String,
    pub password: String,
    /// Region HTML replies are rendered into.
    pub response_region: String,
    /// Region inline error messages are written to.
    pub error_region: String,
}

impl Default for FormIds {
    fn default() -> Self {
        Self {
            username: "uname".to_string(),
            password: "password".to_string(),
            response_region: "response".to_string(),
            error_region: "form_error".to_string(),
        }
    }
}

/// Form submitter configuration.
#[derive(Debug, Clone)]
pub struct SubmitterConfig {
    /// Base origin the endpoint paths are joined onto.
    pub origin: Url,
    /// Upper bound on one submission, request and response included.
    pub timeout: Duration,
    pub ids: FormIds,
}

impl SubmitterConfig {
    pub fn new(origin: Url) -> Self {
        Self {
            origin,
            timeout: DEFAULT_TIMEOUT,
            ids: FormIds::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_ids(mut self, ids: FormIds) -> Self {
        self.ids = ids;
        self
    }
}

/// A form submission event.
#[derive(Debug, Clone, Default)]
pub struct SubmitEvent {
    submitter: Option<String>,
    default_prevented: bool,
}

impl SubmitEvent {
    /// Event raised by the control with this id.
    pub fn from_submitter(id: impl Into<String>) -> Self {
        Self {
            submitter: Some(id.into()),
            default_prevented: false,
        }
    }

    /// Event with no originating control (e.g. `form.requestSubmit()`).
    pub fn without_submitter() -> Self {
        Self::default()
    }

    pub fn submitter(&self) -> Option<&str> {
        self.submitter.as_deref()
    }

    /// Suppress the browser's native form post.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What a successful submission produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The server answered JSON; the parsed document is handed back.
    Json {
        endpoint: Endpoint,
        status: u16,
        data: Value,
    },
    /// The server answered HTML, now rendered into `region`.
    Html {
        endpoint: Endpoint,
        status: u16,
        region: String,
    },
}

impl SubmissionOutcome {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            SubmissionOutcome::Json { endpoint, .. } | SubmissionOutcome::Html { endpoint, .. } => {
                *endpoint
            }
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            SubmissionOutcome::Json { status, .. } | SubmissionOutcome::Html { status, .. } => {
                *status
            }
        }
    }

    pub fn json(&self) -> Option<&Value> {
        match self {
            SubmissionOutcome::Json { data, .. } => Some(data),
            SubmissionOutcome::Html { .. } => None,
        }
    }

    /// The JSON body classified against the server's reply envelopes.
    pub fn reply(&self) -> Option<ServerReply> {
        self.json().map(ServerReply::from_value)
    }
}

/// Turns form submit events into credential posts.
pub struct FormSubmitter {
    document: Arc<dyn Document>,
    transport: Arc<dyn HttpTransport>,
    config: SubmitterConfig,
}

impl FormSubmitter {
    pub fn new(
        document: Arc<dyn Document>,
        transport: Arc<dyn HttpTransport>,
        config: SubmitterConfig,
    ) -> Self {
        Self {
            document,
            transport,
            config,
        }
    }

    /// Attach to a page, failing fast if any form element is missing.
    pub async fn mount(
        document: Arc<dyn Document>,
        transport: Arc<dyn HttpTransport>,
        config: SubmitterConfig,
    ) -> Result<Self, PageError> {
        let ids = &config.ids;
        for id in [
            ids.username.as_str(),
            ids.password.as_str(),
            Endpoint::SIGN_IN_BUTTON,
            Endpoint::REGISTER_BUTTON,
            ids.response_region.as_str(),
            ids.error_region.as_str(),
        ] {
            if !document.contains(id).await {
                return Err(PageError::MissingElement(id.to_string()));
            }
        }

        Ok(Self::new(document, transport, config))
    }

    pub fn config(&self) -> &SubmitterConfig {
        &self.config
    }

    /// Handle one submit event.
    ///
    /// The native form post is suppressed before anything else, so it stays
    /// suppressed even when the submission fails.
    pub async fn submit(&self, event: &mut SubmitEvent) -> Result<SubmissionOutcome, PageError> {
        event.prevent_default();
        self.dispatch(event.submitter.clone()).await
    }

    /// Like [`submit`](Self::submit), but cancellable through the returned handle.
    ///
    /// Aborting resolves the future to [`PageError::Cancelled`]. Aborting
    /// before the future is first polled means no request is sent at all.
    pub fn submit_abortable<'a>(
        &'a self,
        event: &mut SubmitEvent,
    ) -> (
        impl Future<Output = Result<SubmissionOutcome, PageError>> + use<'a>,
        AbortHandle,
    ) {
        event.prevent_default();

        let (handle, registration) = AbortHandle::new_pair();
        let submission = Abortable::new(self.dispatch(event.submitter.clone()), registration);

        let fut = async move {
            match submission.await {
                Ok(result) => result,
                Err(_aborted) => {
                    tracing::info!("Submission aborted");
                    Err(PageError::Cancelled)
                }
            }
        };

        (fut, handle)
    }

    /// Component boundary: submit, then report the result inline.
    ///
    /// Failures and JSON error replies are written to the error region as
    /// plain text; a clean success clears it.
    pub async fn handle_submit(
        &self,
        event: &mut SubmitEvent,
    ) -> Result<SubmissionOutcome, PageError> {
        let result = self.submit(event).await;

        let message = match &result {
            Ok(outcome) => match outcome.reply() {
                Some(ServerReply::Error(reply)) => {
                    tracing::info!(
                        status = reply.status,
                        error = %reply.error,
                        "Server rejected submission"
                    );
                    reply.user_message()
                }
                _ => String::new(),
            },
            Err(err) => {
                tracing::error!(error = %err, "Submission failed");
                err.user_message()
            }
        };

        let region = &self.config.ids.error_region;
        if let Err(e) = self.document.set_text(region, &message).await {
            tracing::warn!(error = %e, "Cannot report submission result inline");
        }

        result
    }

    async fn dispatch(&self, submitter: Option<String>) -> Result<SubmissionOutcome, PageError> {
        let Some(endpoint) = submitter.as_deref().and_then(Endpoint::from_submitter) else {
            tracing::warn!(submitter = ?submitter, "Ignoring submission from unknown control");
            return Err(PageError::InvalidSubmitter(submitter));
        };

        let credentials = self.read_credentials().await?;

        // An HTML reply needs somewhere to go; find out before the request is sent.
        let region = &self.config.ids.response_region;
        if !self.document.contains(region).await {
            return Err(PageError::MissingElement(region.clone()));
        }

        let url = endpoint.url(&self.config.origin)?;
        let body =
            serde_json::to_string(&credentials).map_err(|e| PageError::Internal(e.to_string()))?;
        let request_id = Uuid::new_v4().to_string();

        tracing::debug!(
            %url,
            %request_id,
            user_name = %credentials.user_name,
            "Posting credentials"
        );

        let request = PostRequest {
            url,
            headers: vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("Content-Type".to_string(), "application/json".to_string()),
                (REQUEST_ID_HEADER.to_string(), request_id.clone()),
            ],
            body,
        };

        let timeout = self.config.timeout;
        let response = tokio::time::timeout(timeout, self.transport.post(request))
            .await
            .map_err(|_| TransportError::Timeout(timeout))??;

        tracing::debug!(
            %request_id,
            status = response.status,
            content_type = ?response.content_type,
            "Response received"
        );

        self.handle_response(endpoint, response).await
    }

    async fn read_credentials(&self) -> Result<Credentials, PageError> {
        let ids = &self.config.ids;

        let user_name = self
            .document
            .input_value(&ids.username)
            .await
            .ok_or_else(|| PageError::MissingElement(ids.username.clone()))?;
        let password = self
            .document
            .input_value(&ids.password)
            .await
            .ok_or_else(|| PageError::MissingElement(ids.password.clone()))?;

        Ok(Credentials::new(user_name, password))
    }

    async fn handle_response(
        &self,
        endpoint: Endpoint,
        response: RawResponse,
    ) -> Result<SubmissionOutcome, PageError> {
        match ContentKind::classify(response.content_type.as_deref()) {
            Some(ContentKind::Json) => {
                let data: Value = serde_json::from_str(&response.body)
                    .map_err(|e| PageError::MalformedResponseBody(e.to_string()))?;

                tracing::info!(%endpoint, status = response.status, "JSON response");

                Ok(SubmissionOutcome::Json {
                    endpoint,
                    status: response.status,
                    data,
                })
            }
            Some(ContentKind::Html) => {
                let region = self.config.ids.response_region.clone();
                self.document.set_inner_html(&region, &response.body).await?;

                tracing::info!(
                    %endpoint,
                    status = response.status,
                    region = %region,
                    "HTML response rendered"
                );

                Ok(SubmissionOutcome::Html {
                    endpoint,
                    status: response.status,
                    region,
                })
            }
            None => {
                tracing::warn!(content_type = ?response.content_type, "Unsupported content type");
                Err(PageError::UnsupportedContentType(response.content_type))
            }
        }
    }
}
