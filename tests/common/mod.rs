//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use folio_engine::{App, MailDispatcher, UiOptions};
use folio_mail::{EmailJsClient, EmailJsSettings};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SEND_PATH: &str = "/api/v1.0/email/send";

/// Mount the EmailJS success response (`200 OK` with a plain-text body)
pub async fn mount_send_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(server)
        .await;
}

/// Mount an EmailJS rejection
pub async fn mount_send_error(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

pub fn settings_for(server: &MockServer) -> EmailJsSettings {
    let mut settings = EmailJsSettings::new("pk_test", "service_test", "template_test");
    settings.api_base = server.uri();
    settings
}

/// Plain-HTTP client; the production client refuses non-HTTPS endpoints.
pub fn client_for(server: &MockServer) -> EmailJsClient {
    EmailJsClient::with_client(reqwest::Client::new(), settings_for(server))
        .expect("valid test settings")
}

pub fn app_for(server: &MockServer) -> App {
    let dispatcher: Arc<dyn MailDispatcher> = Arc::new(client_for(server));
    App::with_dispatcher(Some(dispatcher), UiOptions::default(), "Adrian")
}

pub fn fill_form(app: &mut App, name: &str, email: &str, message: &str) {
    app.enter_compose();
    app.insert_text(name);
    app.focus_next();
    app.insert_text(email);
    app.focus_next();
    app.insert_text(message);
}

/// Ticks until the in-flight send settles or `timeout` passes.
pub async fn tick_until_settled(app: &mut App, timeout: Duration) {
    let deadline = tokio::time::Instant::now() + timeout;
    while app.is_submitting() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "send did not settle within {timeout:?}"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
        app.tick();
    }
}
