//! Contact form validation.
//!
//! Each field reports at most one message: the first failing rule in the
//! order they are checked below. Lengths are UTF-16 code units so the limits
//! agree with the web form this mirrors.

use std::sync::LazyLock;

use regex::Regex;

use folio_types::{ContactForm, ValidationErrors};

pub const NAME_MIN_LEN: usize = 2;
pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 1000;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";
pub const MESSAGE_TOO_LONG: &str = "Message must be less than 1000 characters";

// `\s` here is the browser's whitespace class: Unicode White_Space minus
// U+0085, plus U+FEFF.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[^[\s--\x{85}]\x{FEFF}@]+@[^[\s--\x{85}]\x{FEFF}@]+\.[^[\s--\x{85}]\x{FEFF}@]+$",
    )
    .expect("valid email regex")
});

/// Whitespace as `String.prototype.trim` sees it.
fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn trim_form(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Length as a browser reports it for `String.length`.
#[must_use]
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

#[must_use]
pub fn validate_contact_form(form: &ContactForm) -> ValidationErrors {
    ValidationErrors {
        name: validate_name(&form.name),
        email: validate_email(&form.email),
        message: validate_message(&form.message),
    }
}

#[must_use]
pub fn has_validation_errors(errors: &ValidationErrors) -> bool {
    !errors.is_empty()
}

fn validate_name(name: &str) -> Option<&'static str> {
    let trimmed = trim_form(name);
    if trimmed.is_empty() {
        Some(NAME_REQUIRED)
    } else if utf16_len(trimmed) < NAME_MIN_LEN {
        Some(NAME_TOO_SHORT)
    } else {
        None
    }
}

// The pattern sees the raw value; only the emptiness check trims.
fn validate_email(email: &str) -> Option<&'static str> {
    if trim_form(email).is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !EMAIL_PATTERN.is_match(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

fn validate_message(message: &str) -> Option<&'static str> {
    let trimmed = trim_form(message);
    let len = utf16_len(trimmed);
    if trimmed.is_empty() {
        Some(MESSAGE_REQUIRED)
    } else if len < MESSAGE_MIN_LEN {
        Some(MESSAGE_TOO_SHORT)
    } else if len > MESSAGE_MAX_LEN {
        Some(MESSAGE_TOO_LONG)
    } else {
        None
    }
}
