//! Background mail sends.
//!
//! Each dispatch spawns one task. The task awaits the transport and reports
//! back through the event channel, so the outcome is applied on the event
//! loop like any other event.

use crate::app::event::{AppEvent, SubmissionSeq};
use crate::app::state::FormData;
use crate::config::MailConfig;
use crate::mail::{MailRequest, MailTransport};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Stamps form payloads with the configured send constants and runs them
/// through a [`MailTransport`] without blocking the caller.
pub struct MailDispatcher {
    transport: Arc<dyn MailTransport>,
    config: MailConfig,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl MailDispatcher {
    pub fn new(
        transport: Arc<dyn MailTransport>,
        config: MailConfig,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            transport,
            config,
            event_tx,
        }
    }

    fn request_for(&self, params: FormData) -> MailRequest {
        MailRequest {
            service_id: self.config.service_id.clone(),
            template_id: self.config.template_id.clone(),
            public_key: self.config.public_key.clone(),
            access_token: self.config.access_token.clone(),
            params,
        }
    }

    /// Start sending `payload`. Returns immediately; the result arrives later
    /// as [`AppEvent::MailResolved`] tagged with `seq`.
    pub fn dispatch(&self, seq: SubmissionSeq, payload: FormData) -> JoinHandle<()> {
        let request = self.request_for(payload);
        let send = self.transport.send(request);
        let event_tx = self.event_tx.clone();
        tracing::debug!(seq = seq, "dispatching contact message");
        tokio::spawn(async move {
            let result = send.await;
            if event_tx.send(AppEvent::MailResolved { seq, result }).is_err() {
                tracing::warn!(seq = seq, "event loop gone before delivery outcome arrived");
            }
        })
    }
}
