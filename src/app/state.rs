use crate::app::event::SubmissionSeq;
use crate::config::AppConfig;
use serde::Serialize;

/// The four values the form collects. Serialized as the template parameters
/// of the outgoing message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// A copy of this record with exactly one field replaced.
    pub fn with_field(&self, field: FormField, value: String) -> FormData {
        match field {
            FormField::Name => FormData {
                name: value,
                ..self.clone()
            },
            FormField::Email => FormData {
                email: value,
                ..self.clone()
            },
            FormField::Subject => FormData {
                subject: value,
                ..self.clone()
            },
            FormField::Message => FormData {
                message: value,
                ..self.clone()
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// The control's `name` attribute; also the template parameter key.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<FormField> {
        FormField::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Visible label above the control.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    /// Accessible name of the control.
    pub fn accessible_name(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            FormField::Name => Some("Your Name"),
            FormField::Email => Some("Your email"),
            FormField::Subject => Some("Subject"),
            FormField::Message => None,
        }
    }

    pub fn is_multiline(self) -> bool {
        self == FormField::Message
    }
}

/// The success and error lines. Holding one excludes the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    None,
    Success(String),
    Error(String),
}

/// Current field values plus the two feedback slots. No validation happens
/// here.
#[derive(Debug, Default)]
pub struct FormState {
    data: FormData,
    feedback: Feedback,
}

impl FormState {
    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn value(&self, field: FormField) -> &str {
        self.data.get(field)
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        self.data = self.data.with_field(field, value);
    }

    pub fn reset_fields(&mut self) {
        self.data = FormData::default();
    }

    pub fn set_success(&mut self, text: impl Into<String>) {
        self.feedback = Feedback::Success(text.into());
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.feedback = Feedback::Error(text.into());
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.feedback {
            Feedback::Success(text) => Some(text),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.feedback {
            Feedback::Error(text) => Some(text),
            _ => None,
        }
    }
}

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    SendButton,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Field(FormField::Name),
        Focus::Field(FormField::Email),
        Focus::Field(FormField::Subject),
        Focus::Field(FormField::Message),
        Focus::SendButton,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Where the last submission stands, for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Invalid,
    Pending,
    Sent,
    SendFailed,
}

pub struct AppState {
    pub config: AppConfig,
    pub form: FormState,
    pub focus: Focus,
    /// Byte cursor per field, indexed like [`FormField::ALL`].
    pub cursors: [usize; 4],
    /// Most recently dispatched submission.
    pub latest_submission: Option<SubmissionSeq>,
    pub phase: SubmissionPhase,
    pub next_seq: SubmissionSeq,
    /// Cleared on teardown; outcomes arriving afterwards are dropped.
    pub mounted: bool,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            form: FormState::default(),
            focus: Focus::Field(FormField::Name),
            cursors: [0; 4],
            latest_submission: None,
            phase: SubmissionPhase::Idle,
            next_seq: 1,
            mounted: true,
            should_quit: false,
            dirty: true,
            tick_count: 0,
        }
    }

    pub fn allocate_seq(&mut self) -> SubmissionSeq {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn cursor_index(field: FormField) -> usize {
        FormField::ALL.iter().position(|f| *f == field).unwrap_or(0)
    }

    /// Cursor for `field`, clamped to its current value.
    pub fn cursor(&self, field: FormField) -> usize {
        let value = self.form.value(field);
        let mut pos = self.cursors[Self::cursor_index(field)].min(value.len());
        while !value.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    pub fn set_cursor(&mut self, field: FormField, cursor: usize) {
        self.cursors[Self::cursor_index(field)] = cursor;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.dirty = true;
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        match self.phase {
            SubmissionPhase::Idle if !self.config.mail.is_configured() => {
                "Ready (mail service not configured)".to_string()
            }
            SubmissionPhase::Idle => "Ready".to_string(),
            SubmissionPhase::Invalid => "Missing fields".to_string(),
            SubmissionPhase::Pending => {
                let dots = ".".repeat((self.tick_count / 5 % 4) as usize);
                format!("Sending{}", dots)
            }
            SubmissionPhase::Sent => "Sent".to_string(),
            SubmissionPhase::SendFailed => "Send failed".to_string(),
        }
    }
}
