//! Contact form records.

/// The three inputs of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your name",
            FormField::Email => "your.email@example.com",
            FormField::Message => "Tell me about your project...",
        }
    }

    /// Focus order wraps around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }
}

/// Sparse field-level error map. An absent entry means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ValidationErrors {
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        match field {
            FormField::Name => self.name,
            FormField::Email => self.email,
            FormField::Message => self.message,
        }
    }

    /// Drops the error for one field, leaving the others untouched.
    pub fn clear(&mut self, field: FormField) {
        *self.slot(field) = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Present errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        FormField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|message| (field, message)))
    }

    fn slot(&mut self, field: FormField) -> &mut Option<&'static str> {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}

/// Display state of the submit control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

impl SubmitStatus {
    /// Text of the submit control.
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            SubmitStatus::Idle => "Send Message",
            SubmitStatus::Sending => "Sending...",
            SubmitStatus::Sent => "Message Sent!",
            SubmitStatus::Error => "Try Again",
        }
    }

    /// Banner shown under the form, if any.
    #[must_use]
    pub const fn banner(self) -> Option<&'static str> {
        match self {
            SubmitStatus::Sent => Some("Thank you! Your message has been sent successfully."),
            SubmitStatus::Error => {
                Some("Sorry, there was an error sending your message. Please try again.")
            }
            SubmitStatus::Idle | SubmitStatus::Sending => None,
        }
    }
}
