//! EmailJS REST client.
//!
//! Sends `POST {api_base}/api/v1.0/email/send` with the service, template and
//! public key identifying the account. The EmailJS account must allow API
//! access from non-browser applications.

use std::fmt;

use serde::Serialize;

use crate::{
    MailDispatcher, MailError, MailFut, TemplateParams, http_client_with_timeout,
    read_capped_error_body,
};

/// Canonical EmailJS API base URL.
pub const EMAILJS_API_BASE: &str = "https://api.emailjs.com";

const SEND_PATH: &str = "/api/v1.0/email/send";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Account identifiers for EmailJS.
#[derive(Clone)]
pub struct EmailJsSettings {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
    /// Private key, required when the account enforces strict mode.
    pub access_token: Option<String>,
    pub api_base: String,
    pub timeout_secs: u64,
}

impl EmailJsSettings {
    #[must_use]
    pub fn new(
        public_key: impl Into<String>,
        service_id: impl Into<String>,
        template_id: impl Into<String>,
    ) -> Self {
        Self {
            public_key: public_key.into(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            access_token: None,
            api_base: EMAILJS_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Rejects settings with an empty identifier.
    pub fn validate(&self) -> Result<(), MailError> {
        if self.public_key.trim().is_empty() {
            return Err(MailError::NotConfigured("public_key"));
        }
        if self.service_id.trim().is_empty() {
            return Err(MailError::NotConfigured("service_id"));
        }
        if self.template_id.trim().is_empty() {
            return Err(MailError::NotConfigured("template_id"));
        }
        Ok(())
    }

    fn endpoint(&self) -> String {
        format!("{}{SEND_PATH}", self.api_base.trim_end_matches('/'))
    }
}

// Manual Debug impl to prevent leaking keys in logs.
impl fmt::Debug for EmailJsSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailJsSettings")
            .field("public_key", &"[REDACTED]")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: reqwest::Client,
    endpoint: String,
    settings: EmailJsSettings,
}

impl EmailJsClient {
    /// Builds a client with the hardened (HTTPS-only) HTTP stack.
    pub fn new(settings: EmailJsSettings) -> Result<Self, MailError> {
        let client = http_client_with_timeout(settings.timeout_secs)?;
        Self::with_client(client, settings)
    }

    /// Builds a client on a caller-provided HTTP client.
    pub fn with_client(
        client: reqwest::Client,
        settings: EmailJsSettings,
    ) -> Result<Self, MailError> {
        settings.validate()?;
        Ok(Self {
            client,
            endpoint: settings.endpoint(),
            settings,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, params: &TemplateParams) -> Result<(), MailError> {
        let request = SendRequest {
            service_id: &self.settings.service_id,
            template_id: &self.settings.template_id,
            user_id: &self.settings.public_key,
            access_token: self.settings.access_token.as_deref(),
            template_params: params,
        };

        tracing::debug!(
            service_id = %self.settings.service_id,
            template_id = %self.settings.template_id,
            "Sending contact email"
        );

        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "Contact email accepted");
            return Ok(());
        }

        let body = read_capped_error_body(response).await;
        Err(MailError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

impl MailDispatcher for EmailJsClient {
    fn send<'a>(&'a self, params: &'a TemplateParams) -> MailFut<'a> {
        Box::pin(self.post(params))
    }

    fn name(&self) -> &'static str {
        "emailjs"
    }
}
