//! Submission handling: presence check, dispatch, and outcome reconciliation.
//!
//! Validation only rejects empty strings. A field holding nothing but spaces
//! passes. There is no in-flight guard: submitting twice sends twice, and
//! only the most recent dispatch may update the form when it resolves.

use crate::app::action::Action;
use crate::app::event::SubmissionSeq;
use crate::app::state::{AppState, FormData, FormField, SubmissionPhase};
use crate::mail::{MailError, SendReceipt};

pub const REQUIRED_MESSAGE: &str = "All fields are required.";
pub const SENT_MESSAGE: &str = "Form submitted successfully!";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// True when every field is non-empty.
pub fn validate(data: &FormData) -> bool {
    FormField::ALL.iter().all(|f| !data.get(*f).is_empty())
}

/// Validate the current form and, if it passes, emit one send for its
/// values. On failure the error line is set and nothing is sent.
pub fn submit(state: &mut AppState) -> Vec<Action> {
    state.dirty = true;

    if !validate(state.form.data()) {
        state.form.set_error(REQUIRED_MESSAGE);
        state.phase = SubmissionPhase::Invalid;
        tracing::debug!("submission rejected: empty field");
        return vec![];
    }

    let seq = state.allocate_seq();
    state.latest_submission = Some(seq);
    state.phase = SubmissionPhase::Pending;
    tracing::info!(seq = seq, "submitting contact form");

    vec![Action::SendMail {
        seq,
        payload: state.form.data().clone(),
    }]
}

/// Apply the outcome of submission `seq`.
pub fn resolve(state: &mut AppState, seq: SubmissionSeq, result: Result<SendReceipt, MailError>) {
    if !state.mounted {
        tracing::warn!(seq = seq, "delivery outcome arrived after teardown, dropped");
        return;
    }
    if state.latest_submission != Some(seq) {
        tracing::debug!(
            seq = seq,
            latest = ?state.latest_submission,
            "superseded delivery outcome dropped"
        );
        return;
    }

    match result {
        Ok(receipt) => {
            tracing::info!(
                seq = seq,
                status = receipt.status,
                text = %receipt.text,
                "Message sent successfully!"
            );
            state.form.set_success(SENT_MESSAGE);
            state.form.reset_fields();
            state.phase = SubmissionPhase::Sent;
        }
        Err(e) => {
            tracing::error!(seq = seq, error = %e, "Failed to send message");
            state.form.set_error(FAILED_MESSAGE);
            state.phase = SubmissionPhase::SendFailed;
        }
    }
    state.dirty = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn state_with(name: &str, email: &str, subject: &str, message: &str) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.form.set_field(FormField::Name, name.into());
        state.form.set_field(FormField::Email, email.into());
        state.form.set_field(FormField::Subject, subject.into());
        state.form.set_field(FormField::Message, message.into());
        state
    }

    fn ok() -> Result<SendReceipt, MailError> {
        Ok(SendReceipt {
            status: 200,
            text: "OK".into(),
        })
    }

    fn rejected() -> Result<SendReceipt, MailError> {
        Err(MailError::Rejected {
            status: 412,
            text: "Invalid grant".into(),
        })
    }

    fn only_seq(actions: &[Action]) -> SubmissionSeq {
        match actions {
            [Action::SendMail { seq, .. }] => *seq,
            other => panic!("expected one send, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_presence_only() {
        assert!(validate(state_with("Ana", "a@b.com", "Hi", "Hello").form.data()));
        assert!(validate(state_with(" ", " ", " ", " ").form.data()));
        assert!(validate(state_with("Ana", "not an email", "Hi", "Hello").form.data()));
        assert!(!validate(&FormData::default()));
        for field in FormField::ALL {
            let data = state_with("a", "b", "c", "d")
                .form
                .data()
                .with_field(field, String::new());
            assert!(!validate(&data), "{} empty should fail", field.name());
        }
    }

    #[test]
    fn test_missing_field_sends_nothing() {
        let mut state = state_with("Ana", "", "Hi", "Hello");
        state.form.set_success(SENT_MESSAGE);
        let before = state.form.data().clone();

        let actions = submit(&mut state);

        assert!(actions.is_empty());
        assert_eq!(state.form.error_message(), Some(REQUIRED_MESSAGE));
        assert_eq!(state.form.success_message(), None);
        assert_eq!(state.form.data(), &before);
        assert_eq!(state.phase, SubmissionPhase::Invalid);
        assert_eq!(state.latest_submission, None);
    }

    #[test]
    fn test_valid_form_sends_current_values_once() {
        let mut state = state_with("  ", "a@b.com", "Hi", "Hello");
        let actions = submit(&mut state);

        assert_eq!(
            actions,
            vec![Action::SendMail {
                seq: 1,
                payload: FormData {
                    name: "  ".into(),
                    email: "a@b.com".into(),
                    subject: "Hi".into(),
                    message: "Hello".into(),
                },
            }]
        );
        assert_eq!(state.phase, SubmissionPhase::Pending);
    }

    #[test]
    fn test_success_resets_fields() {
        let mut state = state_with("Ana", "a@b.com", "Hi", "Hello");
        state.form.set_error(REQUIRED_MESSAGE);
        let seq = only_seq(&submit(&mut state));

        resolve(&mut state, seq, ok());

        assert_eq!(state.form.data(), &FormData::default());
        assert_eq!(state.form.success_message(), Some(SENT_MESSAGE));
        assert_eq!(state.form.error_message(), None);
        assert_eq!(state.phase, SubmissionPhase::Sent);
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut state = state_with("Ana", "a@b.com", "Hi", "Hello");
        let before = state.form.data().clone();
        let seq = only_seq(&submit(&mut state));

        resolve(&mut state, seq, rejected());

        assert_eq!(state.form.data(), &before);
        assert_eq!(state.form.error_message(), Some(FAILED_MESSAGE));
        assert_eq!(state.form.success_message(), None);
        assert_eq!(state.phase, SubmissionPhase::SendFailed);
    }

    #[test]
    fn test_configuration_error_is_a_delivery_failure() {
        let mut state = state_with("Ana", "a@b.com", "Hi", "Hello");
        let seq = only_seq(&submit(&mut state));

        resolve(&mut state, seq, Err(MailError::NotConfigured("service_id")));

        assert_eq!(state.form.error_message(), Some(FAILED_MESSAGE));
        assert_eq!(state.form.value(FormField::Name), "Ana");
    }

    #[test]
    fn test_double_submit_sends_twice_and_latest_wins() {
        let mut state = state_with("Ana", "a@b.com", "Hi", "Hello");
        let first = only_seq(&submit(&mut state));
        let second = only_seq(&submit(&mut state));
        assert_ne!(first, second);

        // late failure of the first attempt must not clobber the second
        resolve(&mut state, second, ok());
        resolve(&mut state, first, rejected());

        assert_eq!(state.form.success_message(), Some(SENT_MESSAGE));
        assert_eq!(state.phase, SubmissionPhase::Sent);
    }

    #[test]
    fn test_superseded_outcome_dropped_while_pending() {
        let mut state = state_with("Ana", "a@b.com", "Hi", "Hello");
        let first = only_seq(&submit(&mut state));
        let _second = only_seq(&submit(&mut state));

        resolve(&mut state, first, ok());

        assert_eq!(state.form.value(FormField::Name), "Ana");
        assert_eq!(state.form.success_message(), None);
        assert_eq!(state.phase, SubmissionPhase::Pending);
    }

    #[test]
    fn test_outcome_after_teardown_dropped() {
        let mut state = state_with("Ana", "a@b.com", "Hi", "Hello");
        let seq = only_seq(&submit(&mut state));
        state.mounted = false;

        resolve(&mut state, seq, ok());

        assert_eq!(state.form.value(FormField::Message), "Hello");
        assert_eq!(state.form.success_message(), None);
    }

    #[test]
    fn test_invalid_after_success_replaces_message() {
        let mut state = state_with("Ana", "a@b.com", "Hi", "Hello");
        let seq = only_seq(&submit(&mut state));
        resolve(&mut state, seq, ok());

        // fields are now empty
        assert!(submit(&mut state).is_empty());
        assert_eq!(state.form.error_message(), Some(REQUIRED_MESSAGE));
        assert_eq!(state.form.success_message(), None);
    }
}
