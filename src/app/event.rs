use crate::mail::{MailError, SendReceipt};
use crossterm::event::Event as CrosstermEvent;

/// Monotonic id of one submission attempt that passed validation.
pub type SubmissionSeq = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The external send for submission `seq` finished
    MailResolved {
        seq: SubmissionSeq,
        result: Result<SendReceipt, MailError>,
    },

    /// Tick for UI refresh
    Tick,
}
