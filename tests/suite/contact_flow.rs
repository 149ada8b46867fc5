//! Full submit lifecycle through the App with a real HTTP dispatcher.

use std::time::{Duration, Instant};

use folio_engine::{STATUS_RESET_AFTER, SubmitOutcome, SubmitStatus};
use wiremock::MockServer;

use crate::common::{app_for, fill_form, mount_send_error, mount_send_ok, tick_until_settled};

const SETTLE_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::test(flavor = "multi_thread")]
async fn successful_send_clears_form_then_returns_to_idle() {
    let server = MockServer::start().await;
    mount_send_ok(&server).await;
    let mut app = app_for(&server);

    fill_form(&mut app, "Ada", "ada@example.com", "Hello there, Adrian!");
    assert_eq!(app.submit(), SubmitOutcome::Dispatched);
    assert_eq!(app.submit_status(), SubmitStatus::Sending);
    assert_eq!(app.submit(), SubmitOutcome::Ignored);

    tick_until_settled(&mut app, SETTLE_TIMEOUT).await;
    assert_eq!(app.submit_status(), SubmitStatus::Sent);
    assert!(app.form().name.is_empty());
    assert!(app.form().email.is_empty());
    assert!(app.form().message.is_empty());

    app.tick_at(Instant::now() + STATUS_RESET_AFTER);
    assert_eq!(app.submit_status(), SubmitStatus::Idle);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "double submit must not send twice");
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_send_keeps_input_for_retry() {
    let server = MockServer::start().await;
    mount_send_error(&server, 400, "The Public Key is invalid").await;
    let mut app = app_for(&server);

    fill_form(&mut app, "Ada", "ada@example.com", "Hello there, Adrian!");
    app.submit();
    tick_until_settled(&mut app, SETTLE_TIMEOUT).await;

    assert_eq!(app.submit_status(), SubmitStatus::Error);
    assert_eq!(app.submit_status().button_label(), "Try Again");
    assert_eq!(app.form().name, "Ada");

    // Retrying from the error state dispatches again.
    assert_eq!(app.submit(), SubmitOutcome::Dispatched);
    tick_until_settled(&mut app, SETTLE_TIMEOUT).await;
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_form_never_reaches_the_service() {
    let server = MockServer::start().await;
    mount_send_ok(&server).await;
    let mut app = app_for(&server);

    fill_form(&mut app, "A", "not-an-email", "short");
    assert_eq!(app.submit(), SubmitOutcome::Invalid);
    assert!(!app.is_submitting());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(server.received_requests().await.unwrap().is_empty());
}
