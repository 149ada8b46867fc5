//! Validation as the contact form sees it.

use folio_core::validation::{
    EMAIL_INVALID, EMAIL_REQUIRED, MESSAGE_REQUIRED, MESSAGE_TOO_LONG, MESSAGE_TOO_SHORT,
    NAME_REQUIRED, NAME_TOO_SHORT,
};
use folio_core::{has_validation_errors, validate_contact_form};
use folio_engine::{App, FormField, SubmitOutcome, SubmitStatus, UiOptions};
use folio_types::ContactForm;

use crate::common::fill_form;

fn offline_app() -> App {
    App::with_dispatcher(None, UiOptions::default(), "Adrian")
}

#[test]
fn documented_examples() {
    let empty = validate_contact_form(&ContactForm::new("", "", ""));
    assert_eq!(empty.name, Some(NAME_REQUIRED));
    assert_eq!(empty.email, Some(EMAIL_REQUIRED));
    assert_eq!(empty.message, Some(MESSAGE_REQUIRED));

    let short = validate_contact_form(&ContactForm::new("A", "bad", "short"));
    assert_eq!(short.name, Some(NAME_TOO_SHORT));
    assert_eq!(short.email, Some(EMAIL_INVALID));
    assert_eq!(short.message, Some(MESSAGE_TOO_SHORT));

    let valid = validate_contact_form(&ContactForm::new(
        "Adrian",
        "a@b.com",
        "A valid message body.",
    ));
    assert!(valid.is_empty());
    assert!(!has_validation_errors(&valid));

    let long = validate_contact_form(&ContactForm::new("Ada", "a@b.co", "x".repeat(1001)));
    assert_eq!(long.len(), 1);
    assert_eq!(long.message, Some(MESSAGE_TOO_LONG));
}

#[test]
fn submit_stores_errors_and_keeps_status_idle() {
    let mut app = offline_app();
    fill_form(&mut app, "A", "bad", "short");

    assert_eq!(app.submit(), SubmitOutcome::Invalid);
    assert_eq!(app.submit_status(), SubmitStatus::Idle);
    assert_eq!(app.validation_errors().len(), 3);
    assert_eq!(app.focused_field(), FormField::Name);
}

#[test]
fn fixing_a_field_clears_only_its_error() {
    let mut app = offline_app();
    fill_form(&mut app, "A", "bad", "short");
    app.submit();

    // Focus is back on the name after the failed submit.
    app.insert_text("da");
    assert_eq!(app.validation_errors().name, None);
    assert_eq!(app.validation_errors().email, Some(EMAIL_INVALID));
    assert_eq!(app.validation_errors().message, Some(MESSAGE_TOO_SHORT));
}

#[test]
fn typed_message_cannot_exceed_the_limit() {
    let mut app = offline_app();
    fill_form(&mut app, "Ada", "ada@example.com", &"x".repeat(1200));
    assert_eq!(app.contact().message_len(), 1000);

    // At the cap the message is valid, so the submit reaches the (missing) mail service.
    assert_eq!(app.submit(), SubmitOutcome::Unavailable);
    assert!(app.validation_errors().is_empty());
}

#[test]
fn pasted_byte_order_marks_count_as_empty() {
    let mut app = offline_app();
    fill_form(&mut app, "\u{FEFF}", "\u{FEFF}", "\u{FEFF}\u{FEFF}");

    assert_eq!(app.submit(), SubmitOutcome::Invalid);
    let errors = app.validation_errors();
    assert_eq!(errors.name, Some(NAME_REQUIRED));
    assert_eq!(errors.email, Some(EMAIL_REQUIRED));
    assert_eq!(errors.message, Some(MESSAGE_REQUIRED));
}
