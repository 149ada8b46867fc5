//! Contact form delivery through a transactional email service.
//!
//! # Architecture
//!
//! - [`MailDispatcher`] - the capability the engine depends on; one `send` per submission
//! - [`TemplateParams`] - the record handed to the email template
//! - [`emailjs`] - EmailJS REST client implementing [`MailDispatcher`]
//!
//! # Error Handling
//!
//! The caller only distinguishes success from failure. [`MailError`] keeps the
//! cause for logging; it is never shown to the person filling in the form.

pub mod emailjs;

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use folio_types::ContactForm;

pub use emailjs::{EMAILJS_API_BASE, EmailJsClient, EmailJsSettings};

const CONNECT_TIMEOUT_SECS: u64 = 10;

const MAX_ERROR_BODY_BYTES: usize = 4 * 1024;

/// Mail send future type alias.
pub type MailFut<'a> = Pin<Box<dyn Future<Output = Result<(), MailError>> + Send + 'a>>;

/// Delivers one contact form submission.
pub trait MailDispatcher: Send + Sync {
    fn send<'a>(&'a self, params: &'a TemplateParams) -> MailFut<'a>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail service rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("mail transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("mail service is not configured: missing {0}")]
    NotConfigured(&'static str),
}

/// Template variables sent with each submission.
///
/// The `user_*`, `name`, `email` and `reply_to` aliases duplicate the primary
/// fields so templates written against any of the common variable names
/// render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
    pub user_name: String,
    pub user_email: String,
    pub user_message: String,
    pub name: String,
    pub email: String,
    pub reply_to: String,
}

impl TemplateParams {
    #[must_use]
    pub fn from_form(form: &ContactForm, to_name: &str) -> Self {
        Self {
            from_name: form.name.clone(),
            from_email: form.email.clone(),
            message: form.message.clone(),
            to_name: to_name.to_string(),
            user_name: form.name.clone(),
            user_email: form.email.clone(),
            user_message: form.message.clone(),
            name: form.name.clone(),
            email: form.email.clone(),
            reply_to: form.email.clone(),
        }
    }
}

fn base_client_builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::none())
        .https_only(true)
}

/// Hardened client for production endpoints.
pub fn http_client_with_timeout(timeout_secs: u64) -> Result<reqwest::Client, reqwest::Error> {
    base_client_builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

/// Reads at most [`MAX_ERROR_BODY_BYTES`] of an error response.
pub async fn read_capped_error_body(mut response: reqwest::Response) -> String {
    let mut body = Vec::new();
    while let Ok(Some(chunk)) = response.chunk().await {
        body.extend_from_slice(&chunk);
        if body.len() > MAX_ERROR_BODY_BYTES {
            body.truncate(MAX_ERROR_BODY_BYTES);
            let text = String::from_utf8_lossy(&body);
            return format!("{text}...(truncated)");
        }
    }
    String::from_utf8_lossy(&body).into_owned()
}
