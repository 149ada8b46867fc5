//! Contact form state and the submit lifecycle.
//!
//! ```text
//! Idle --submit(valid)--> Sending --ok--> Sent  --5s--> Idle
//!                                 --err-> Error --5s--> Idle
//! ```
//!
//! The send runs on a spawned task and is polled from [`ContactController::poll`];
//! nothing here blocks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::FutureExt;
use tokio::task::JoinHandle;

use folio_core::{MESSAGE_MAX_LEN, has_validation_errors, utf16_len, validate_contact_form};
use folio_mail::{MailDispatcher, MailError, TemplateParams};
use folio_types::{ContactForm, FormField, SubmitStatus, ValidationErrors};

/// How long `Sent` and `Error` stay visible.
pub const STATUS_RESET_AFTER: Duration = Duration::from_secs(5);

/// What a submit request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are stored on the controller.
    Invalid,
    /// A send is already in flight.
    Ignored,
    /// No mail service; status moved straight to `Error`.
    Unavailable,
    Dispatched,
}

/// A send running on the runtime.
#[derive(Debug)]
struct InFlightSend {
    join_handle: JoinHandle<Result<(), MailError>>,
}

impl InFlightSend {
    fn spawn(dispatcher: Arc<dyn MailDispatcher>, params: TemplateParams) -> Self {
        let join_handle = tokio::spawn(async move { dispatcher.send(&params).await });
        Self { join_handle }
    }

    fn is_finished(&self) -> bool {
        self.join_handle.is_finished()
    }

    fn try_complete_now(mut self) -> Result<Result<(), String>, Self> {
        let Some(result) = (&mut self.join_handle).now_or_never() else {
            return Err(self);
        };
        Ok(match result {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => Err(err.to_string()),
            Err(join_err) => Err(format!("mail task failed: {join_err}")),
        })
    }
}

#[derive(Debug, Default)]
enum SendState {
    #[default]
    Idle,
    Sending(InFlightSend),
    Settled {
        status: SubmitStatus,
        until: Instant,
    },
}

pub struct ContactController {
    form: ContactForm,
    errors: ValidationErrors,
    focus: FormField,
    state: SendState,
    dispatcher: Option<Arc<dyn MailDispatcher>>,
    to_name: String,
}

impl std::fmt::Debug for ContactController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactController")
            .field("form", &self.form)
            .field("errors", &self.errors)
            .field("focus", &self.focus)
            .field("state", &self.state)
            .field("dispatcher", &self.dispatcher.as_ref().map(|d| d.name()))
            .field("to_name", &self.to_name)
            .finish()
    }
}

impl ContactController {
    pub fn new(dispatcher: Option<Arc<dyn MailDispatcher>>, to_name: impl Into<String>) -> Self {
        Self {
            form: ContactForm::default(),
            errors: ValidationErrors::default(),
            focus: FormField::Name,
            state: SendState::Idle,
            dispatcher,
            to_name: to_name.into(),
        }
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    #[must_use]
    pub fn focused(&self) -> FormField {
        self.focus
    }

    pub fn focus(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    #[must_use]
    pub fn has_dispatcher(&self) -> bool {
        self.dispatcher.is_some()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SendState::Sending(_))
    }

    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        match &self.state {
            SendState::Idle => SubmitStatus::Idle,
            SendState::Sending(_) => SubmitStatus::Sending,
            SendState::Settled { status, .. } => *status,
        }
    }

    /// Message length as shown by the counter.
    #[must_use]
    pub fn message_len(&self) -> usize {
        utf16_len(&self.form.message)
    }

    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_text(c.encode_utf8(&mut buf));
    }

    /// Appends to the focused field.
    ///
    /// Control characters are dropped. Newlines survive only in the message,
    /// and the message stops growing at [`MESSAGE_MAX_LEN`] UTF-16 units.
    pub fn insert_text(&mut self, text: &str) {
        let field = self.focus;
        let multiline = field == FormField::Message;
        let mut budget = if multiline {
            MESSAGE_MAX_LEN.saturating_sub(self.message_len())
        } else {
            usize::MAX
        };

        let value = self.form.field_mut(field);
        let before = value.len();
        for c in text.chars() {
            let c = if c == '\r' { '\n' } else { c };
            if c.is_control() && !(multiline && c == '\n') {
                continue;
            }
            let units = c.len_utf16();
            if units > budget {
                break;
            }
            budget -= units;
            value.push(c);
        }

        if value.len() != before {
            self.errors.clear(field);
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focus;
        if self.form.field_mut(field).pop().is_some() {
            self.errors.clear(field);
        }
    }

    pub fn clear_field(&mut self) {
        let field = self.focus;
        let value = self.form.field_mut(field);
        if !value.is_empty() {
            value.clear();
            self.errors.clear(field);
        }
    }

    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if self.is_submitting() {
            tracing::debug!("Submit ignored while a send is in flight");
            return SubmitOutcome::Ignored;
        }

        let errors = validate_contact_form(&self.form);
        if has_validation_errors(&errors) {
            tracing::debug!(count = errors.len(), "Contact form has validation errors");
            if let Some((field, _)) = errors.iter().next() {
                self.focus = field;
            }
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }
        self.errors = ValidationErrors::default();

        let Some(dispatcher) = self.dispatcher.clone() else {
            tracing::warn!("Contact form submitted but no mail service is configured");
            self.state = SendState::Settled {
                status: SubmitStatus::Error,
                until: now + STATUS_RESET_AFTER,
            };
            return SubmitOutcome::Unavailable;
        };

        tracing::info!(dispatcher = dispatcher.name(), "Dispatching contact form");
        let params = TemplateParams::from_form(&self.form, &self.to_name);
        self.state = SendState::Sending(InFlightSend::spawn(dispatcher, params));
        SubmitOutcome::Dispatched
    }

    /// Advances the lifecycle: collects a finished send and expires settled
    /// statuses.
    pub fn poll(&mut self, now: Instant) {
        match std::mem::take(&mut self.state) {
            SendState::Sending(send) if send.is_finished() => match send.try_complete_now() {
                Ok(Ok(())) => {
                    tracing::info!("Contact form sent");
                    self.form.clear();
                    self.focus = FormField::Name;
                    self.state = SendState::Settled {
                        status: SubmitStatus::Sent,
                        until: now + STATUS_RESET_AFTER,
                    };
                }
                Ok(Err(err)) => {
                    tracing::error!(error = %err, "Error sending contact form");
                    self.state = SendState::Settled {
                        status: SubmitStatus::Error,
                        until: now + STATUS_RESET_AFTER,
                    };
                }
                // is_finished() was true but the output is not observable yet.
                Err(send) => self.state = SendState::Sending(send),
            },
            SendState::Settled { until, .. } if now >= until => {
                self.state = SendState::Idle;
            }
            other => self.state = other,
        }
    }
}
