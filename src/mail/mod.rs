//! Transactional mail delivery.
//!
//! The form never talks HTTP itself: it hands a [`MailRequest`] to a
//! [`MailTransport`] through the [`dispatcher::MailDispatcher`], which runs
//! the send on a background task and posts the outcome back to the event
//! loop.

pub mod client;
pub mod dispatcher;

use crate::app::state::FormData;
use futures::future::BoxFuture;
use thiserror::Error;

/// Everything the mail service needs for one send. The identifiers come from
/// configuration, the parameters from the form.
#[derive(Debug, Clone, PartialEq)]
pub struct MailRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub access_token: Option<String>,
    pub params: FormData,
}

/// Status/text pair reported by the service on success.
#[derive(Debug, Clone, PartialEq)]
pub struct SendReceipt {
    pub status: u16,
    pub text: String,
}

/// Any failure of the external send. The form shows one fixed message for
/// all of them; the detail is for the log.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail service not configured: {0} is empty")]
    NotConfigured(&'static str),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rejected with status {status}: {text}")]
    Rejected { status: u16, text: String },
}

/// Boundary to the external "send transactional message" operation.
pub trait MailTransport: Send + Sync {
    fn send(&self, request: MailRequest) -> BoxFuture<'static, Result<SendReceipt, MailError>>;
}
