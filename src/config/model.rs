//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so a missing or partial file still loads; the
//! three send constants default to empty and are rejected at send time.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Transactional mail service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Service identifier registered with the mail provider.
    #[serde(default)]
    pub service_id: String,
    /// Template the four form fields are rendered into.
    #[serde(default)]
    pub template_id: String,
    /// Public key sent as `user_id`.
    #[serde(default)]
    pub public_key: String,
    /// Private access token, only needed when the account enforces it.
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MailConfig {
    /// All three send constants are present.
    pub fn is_configured(&self) -> bool {
        !(self.service_id.is_empty() || self.template_id.is_empty() || self.public_key.is_empty())
    }

    /// Overlay the send constants from `lookup` (normally the process
    /// environment). Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides: [(&str, &mut String); 3] = [
            ("CONTACTFORM_SERVICE_ID", &mut self.service_id),
            ("CONTACTFORM_TEMPLATE_ID", &mut self.template_id),
            ("CONTACTFORM_PUBLIC_KEY", &mut self.public_key),
        ];
        for (var, slot) in overrides {
            if let Some(value) = lookup(var).filter(|v| !v.is_empty()) {
                *slot = value;
            }
        }
    }
}

/// Operator log settings. The log never goes to stdout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_true() -> bool {
    true
}
fn default_log_dir() -> String {
    "~/.local/share/contactform/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
