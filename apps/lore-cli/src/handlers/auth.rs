//! Login form commands: sign in, register, raw submit.

use std::sync::Arc;

use anyhow::bail;
use lore_core::components::{FormSubmitter, SubmissionOutcome, SubmitEvent, SubmitterConfig};
use lore_core::ports::Document;
use lore_shared::ServerReply;

use crate::page;
use crate::state::AppState;

/// Fill in the login form and submit it through `submitter`.
///
/// Returns the text to print. Failures, including error replies from the
/// server, come back as errors carrying the message shown on the page.
pub async fn submit(
    state: &AppState,
    submitter: Option<&str>,
    user_name: &str,
    password: &str,
) -> anyhow::Result<String> {
    let page = Arc::new(page::login_page(user_name, password));
    let config = SubmitterConfig::new(state.config.origin.clone())
        .with_timeout(state.config.request_timeout);
    let form = FormSubmitter::mount(page.clone(), state.transport.clone(), config).await?;

    let mut event = match submitter {
        Some(id) => SubmitEvent::from_submitter(id),
        None => SubmitEvent::without_submitter(),
    };

    let result = form.handle_submit(&mut event).await;
    let inline = page
        .inner_html(&form.config().ids.error_region)
        .await
        .unwrap_or_default();

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => bail!("{} ({})", inline, err),
    };

    if !inline.is_empty() {
        bail!("{} {}: {}", outcome.endpoint(), outcome.status(), inline);
    }

    describe(page.as_ref(), &outcome).await
}

async fn describe(page: &dyn Document, outcome: &SubmissionOutcome) -> anyhow::Result<String> {
    let text = match outcome {
        SubmissionOutcome::Json { endpoint, status, data } => match ServerReply::from_value(data) {
            ServerReply::Data(reply) => format!(
                "{} {}: {}",
                endpoint,
                status,
                serde_json::to_string_pretty(&reply.data)?
            ),
            _ => format!("{} {}: {}", endpoint, status, serde_json::to_string_pretty(data)?),
        },
        SubmissionOutcome::Html { region, .. } => page.inner_html(region).await.unwrap_or_default(),
    };

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::time::Duration;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state(server: &MockServer) -> AppState {
        AppState::new(AppConfig {
            origin: Url::parse(&format!("{}/", server.uri())).unwrap(),
            request_timeout: Duration::from_secs(2),
            storage_path: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_login_prints_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"status":200,"data":{"user":"ilse"}}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let out = submit(&state(&server), Some("sign_in_button"), "ilse", "pw")
            .await
            .unwrap();

        assert!(out.starts_with("login 200: "));
        assert!(out.contains("\"user\": \"ilse\""));
    }

    #[tokio::test]
    async fn test_html_reply_is_printed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<h1>Welcome</h1>", "text/html"))
            .mount(&server)
            .await;

        let out = submit(&state(&server), Some("register_button"), "ilse", "pw")
            .await
            .unwrap();

        assert_eq!(out, "<h1>Welcome</h1>");
    }

    #[tokio::test]
    async fn test_error_reply_fails_with_page_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_raw(r#"{"status":400,"error":"FAILED_LOGIN"}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let err = submit(&state(&server), Some("sign_in_button"), "ilse", "wrong")
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("login 400: You seem to be speaking"));
    }

    #[tokio::test]
    async fn test_unknown_submitter_fails_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = submit(&state(&server), None, "ilse", "pw").await.unwrap_err();

        assert!(err.to_string().contains("sign in or register button"));
    }
}
