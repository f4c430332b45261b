//! Contact form: local validation and a pluggable delivery boundary.
//!
//! Nothing leaves the process by default; [`LogDelivery`] only records that
//! a message arrived. A real transport implements [`ContactDelivery`].

use log::{info, warn};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Duration;

use crate::config::FolioConfig;
use crate::rate_limit::RateLimiter;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

pub const NAME_ERROR: &str = "Name must be at least 2 characters";
pub const EMAIL_ERROR: &str = "Invalid email address";
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters";

pub const SENT_NOTICE: &str = "Message sent! Thank you for reaching out. I'll get back to you soon.";
pub const RATE_LIMITED_NOTICE: &str = "Too many messages. Please try again later.";
pub const DELIVERY_FAILED_NOTICE: &str = "Your message could not be sent. Please try again later.";

/// Raw form post. Every field is optional so a partial post still validates.
#[derive(Debug, Default, FromForm)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    /// Honeypot; humans never see it.
    #[field(name = "_honey")]
    pub honey: Option<String>,
}

/// Field values as shown in the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&ContactSubmission> for ContactValues {
    fn from(s: &ContactSubmission) -> Self {
        ContactValues {
            name: s.name.clone().unwrap_or_default(),
            email: s.email.clone().unwrap_or_default(),
            message: s.message.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// A validated, trimmed message ready for delivery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What the contact form shows: current values and per-field errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormView {
    pub values: ContactValues,
    pub errors: FieldErrors,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("email pattern compiles")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && email_regex().is_match(email)
}

pub fn validate(values: &ContactValues) -> Result<ContactMessage, FieldErrors> {
    let name = values.name.trim();
    let email = values.email.trim();
    let message = values.message.trim();

    let errors = FieldErrors {
        name: (name.chars().count() < NAME_MIN_CHARS).then_some(NAME_ERROR),
        email: (!is_valid_email(email)).then_some(EMAIL_ERROR),
        message: (message.chars().count() < MESSAGE_MIN_CHARS).then_some(MESSAGE_ERROR),
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

/// Where accepted messages go.
pub trait ContactDelivery: Send + Sync {
    fn deliver(&self, message: &ContactMessage) -> Result<(), String>;
}

/// Default delivery: log and accept.
pub struct LogDelivery;

impl ContactDelivery for LogDelivery {
    fn deliver(&self, message: &ContactMessage) -> Result<(), String> {
        info!(
            "Contact message from {} <{}> ({} chars)",
            message.name,
            message.email,
            message.message.chars().count()
        );
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Accepted; the form resets and a notice is shown.
    Sent,
    /// Honeypot tripped. Looks like success to the sender.
    Dropped,
    RateLimited,
    /// Field errors; the form is shown again with the entered values.
    Invalid(FormView),
    DeliveryFailed,
}

pub fn submit(
    submission: &ContactSubmission,
    limiter: &RateLimiter,
    limiter_key: &str,
    config: &FolioConfig,
    delivery: &dyn ContactDelivery,
) -> SubmitOutcome {
    if submission.honey.as_deref().is_some_and(|h| !h.trim().is_empty()) {
        info!("Contact submission dropped by honeypot");
        return SubmitOutcome::Dropped;
    }

    let window = Duration::from_secs(config.contact_window_secs);
    if !limiter.check_and_record(limiter_key, config.contact_max_attempts, window) {
        warn!("Contact submission rate limited for {}", limiter_key);
        return SubmitOutcome::RateLimited;
    }

    let values = ContactValues::from(submission);
    match validate(&values) {
        Ok(message) => match delivery.deliver(&message) {
            Ok(()) => SubmitOutcome::Sent,
            Err(e) => {
                warn!("Contact delivery failed: {}", e);
                SubmitOutcome::DeliveryFailed
            }
        },
        Err(errors) => SubmitOutcome::Invalid(FormView { values, errors }),
    }
}
