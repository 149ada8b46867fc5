//! EmailJS client against a mock server.

use folio_mail::{EmailJsClient, MailDispatcher, MailError, TemplateParams};
use folio_types::ContactForm;
use serde_json::Value;
use wiremock::MockServer;

use crate::common::{SEND_PATH, client_for, mount_send_error, mount_send_ok, settings_for};

fn params() -> TemplateParams {
    let form = ContactForm::new("Ada Lovelace", "ada@example.com", "Hello there, Adrian!");
    TemplateParams::from_form(&form, "Adrian")
}

#[tokio::test]
async fn request_body_carries_account_and_all_aliases() {
    let server = MockServer::start().await;
    mount_send_ok(&server).await;

    client_for(&server).send(&params()).await.expect("send succeeds");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), SEND_PATH);

    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["service_id"], "service_test");
    assert_eq!(body["template_id"], "template_test");
    assert_eq!(body["user_id"], "pk_test");
    assert!(body.get("accessToken").is_none());

    let template = &body["template_params"];
    for key in ["from_name", "user_name", "name"] {
        assert_eq!(template[key], "Ada Lovelace", "{key}");
    }
    for key in ["from_email", "user_email", "email", "reply_to"] {
        assert_eq!(template[key], "ada@example.com", "{key}");
    }
    assert_eq!(template["message"], template["user_message"]);
    assert_eq!(template["to_name"], "Adrian");
}

#[tokio::test]
async fn rejection_keeps_status_and_body() {
    let server = MockServer::start().await;
    mount_send_error(&server, 412, "Template not found").await;

    let err = client_for(&server).send(&params()).await.unwrap_err();
    assert!(
        matches!(err, MailError::Rejected { status: 412, ref body } if body == "Template not found"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let server = MockServer::start().await;
    let settings = settings_for(&server);
    drop(server);

    let client = EmailJsClient::with_client(reqwest::Client::new(), settings).unwrap();
    let err = client.send(&params()).await.unwrap_err();
    assert!(matches!(err, MailError::Transport(_)), "unexpected error: {err:?}");
}
