use serde::Deserialize;
use std::{env, fmt, fs, path::Path, path::PathBuf};
use thiserror::Error;

use folio_mail::{EMAILJS_API_BASE, EmailJsSettings, emailjs::DEFAULT_TIMEOUT_SECS};
use folio_types::ui::{Theme, UiOptions};

/// Recipient name used in the email template when none is configured.
pub const DEFAULT_TO_NAME: &str = "Adrian";

#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    pub app: Option<AppConfig>,
    pub emailjs: Option<EmailJsConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// "dark" or "light".
    pub theme: Option<String>,
    /// Use ASCII-only glyphs for markers and icons.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

/// EmailJS account settings.
///
/// ```toml
/// [emailjs]
/// public_key = "${FOLIO_EMAILJS_PUBLIC_KEY}"
/// service_id = "service_xxx"
/// template_id = "template_xxx"
/// to_name = "Adrian"
/// ```
#[derive(Default, Deserialize)]
pub struct EmailJsConfig {
    pub public_key: Option<String>,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub access_token: Option<String>,
    pub to_name: Option<String>,
    pub api_base: Option<String>,
    pub timeout_secs: Option<u64>,
}

// Manual Debug impl to prevent leaking keys in logs.
impl fmt::Debug for EmailJsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn mask(opt: Option<&String>) -> &'static str {
            if opt.is_some() { "[REDACTED]" } else { "None" }
        }
        f.debug_struct("EmailJsConfig")
            .field("public_key", &mask(self.public_key.as_ref()))
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("access_token", &mask(self.access_token.as_ref()))
            .field("to_name", &self.to_name)
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Expands `${VAR}` references through `lookup`; unknown vars become empty.
fn expand_with(value: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let var = &after[..end];
        if !var.is_empty() {
            out.push_str(&lookup(var).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

impl FolioConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        toml::from_str(&content).map_err(|err| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, err);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source: err,
            }
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// UI options from config, with `FOLIO_THEME` taking precedence.
    #[must_use]
    pub fn ui_options(config: Option<&Self>) -> UiOptions {
        Self::ui_options_with(config, |name| env::var(name).ok())
    }

    fn ui_options_with(config: Option<&Self>, lookup: impl Fn(&str) -> Option<String>) -> UiOptions {
        let app = config.and_then(|cfg| cfg.app.as_ref());
        let configured_theme = app.and_then(|app| app.theme.as_deref()).and_then(|raw| {
            let theme = Theme::parse(raw);
            if theme.is_none() {
                tracing::warn!("Unknown theme in config: {}", raw);
            }
            theme
        });
        let theme = lookup("FOLIO_THEME")
            .as_deref()
            .and_then(Theme::parse)
            .or(configured_theme)
            .unwrap_or_default();

        UiOptions {
            ascii_only: app.is_some_and(|app| app.ascii_only),
            high_contrast: app.is_some_and(|app| app.high_contrast),
            theme,
        }
    }

    /// EmailJS settings, or `None` when an identifier is missing.
    ///
    /// `FOLIO_EMAILJS_PUBLIC_KEY`, `FOLIO_EMAILJS_SERVICE_ID` and
    /// `FOLIO_EMAILJS_TEMPLATE_ID` override the file.
    #[must_use]
    pub fn emailjs_settings(config: Option<&Self>) -> Option<EmailJsSettings> {
        Self::emailjs_settings_with(config, |name| env::var(name).ok())
    }

    fn emailjs_settings_with(
        config: Option<&Self>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Option<EmailJsSettings> {
        let section = config.and_then(|cfg| cfg.emailjs.as_ref());
        let resolve = |env_name: &str, value: Option<&String>| -> Option<String> {
            lookup(env_name)
                .or_else(|| value.map(|raw| expand_with(raw, &lookup)))
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let public_key = resolve(
            "FOLIO_EMAILJS_PUBLIC_KEY",
            section.and_then(|s| s.public_key.as_ref()),
        )?;
        let service_id = resolve(
            "FOLIO_EMAILJS_SERVICE_ID",
            section.and_then(|s| s.service_id.as_ref()),
        )?;
        let template_id = resolve(
            "FOLIO_EMAILJS_TEMPLATE_ID",
            section.and_then(|s| s.template_id.as_ref()),
        )?;

        let mut settings = EmailJsSettings::new(public_key, service_id, template_id);
        settings.access_token = section
            .and_then(|s| s.access_token.as_ref())
            .map(|raw| expand_with(raw, &lookup))
            .filter(|token| !token.trim().is_empty());
        settings.api_base = section
            .and_then(|s| s.api_base.clone())
            .unwrap_or_else(|| EMAILJS_API_BASE.to_string());
        settings.timeout_secs = section
            .and_then(|s| s.timeout_secs)
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Some(settings)
    }

    #[must_use]
    pub fn to_name(config: Option<&Self>) -> String {
        config
            .and_then(|cfg| cfg.emailjs.as_ref())
            .and_then(|s| s.to_name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_TO_NAME)
            .to_string()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
}
