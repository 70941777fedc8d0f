use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::input::{self, Edit};
use crate::app::state::*;
use crate::app::submit;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

/// A control reporting its new value, identified by its own `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent<'a> {
    pub name: &'a str,
    pub value: String,
}

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::MailResolved { seq, result } => {
            submit::resolve(state, seq, result);
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // animate the sending indicator
            if state.phase == SubmissionPhase::Pending {
                state.dirty = true;
            }
            vec![]
        }
    }
}

/// The one change handler behind every control.
pub fn handle_change(state: &mut AppState, event: ChangeEvent) {
    let Some(field) = FormField::from_name(event.name) else {
        tracing::debug!(name = event.name, "change from unknown control ignored");
        return;
    };
    state.form.set_field(field, event.value);
    if state.phase != SubmissionPhase::Pending {
        state.phase = SubmissionPhase::Idle;
    }
    state.dirty = true;
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Paste(text) => {
            if let Focus::Field(field) = state.focus {
                paste_into_field(state, field, &text);
            }
            vec![]
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keybindings
    if (ctrl && key.code == KeyCode::Char('c')) || key.code == KeyCode::Esc {
        return vec![Action::Quit];
    }
    if ctrl && key.code == KeyCode::Char('s') {
        return submit::submit(state);
    }
    match key.code {
        KeyCode::Tab => {
            state.focus_next();
            return vec![];
        }
        KeyCode::BackTab => {
            state.focus_prev();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        Focus::SendButton => handle_button_key(state, key),
        Focus::Field(field) => handle_field_key(state, field, key),
    }
}

fn handle_button_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => submit::submit(state),
        KeyCode::Up => {
            state.focus_prev();
            vec![]
        }
        KeyCode::Down => {
            state.focus_next();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_field_key(state: &mut AppState, field: FormField, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let edit = match key.code {
        KeyCode::Enter if field.is_multiline() => Edit::Insert('\n'),
        KeyCode::Enter => {
            state.focus_next();
            return vec![];
        }
        KeyCode::Up if !field.is_multiline() => {
            state.focus_prev();
            return vec![];
        }
        KeyCode::Down if !field.is_multiline() => {
            state.focus_next();
            return vec![];
        }
        KeyCode::Char('w') if ctrl => Edit::DeleteWordBack,
        KeyCode::Char('a') if ctrl => Edit::Home,
        KeyCode::Char('e') if ctrl => Edit::End,
        KeyCode::Char(c) if !ctrl && !alt => Edit::Insert(c),
        KeyCode::Backspace => Edit::DeleteBack,
        KeyCode::Delete => Edit::DeleteForward,
        KeyCode::Left => Edit::Left,
        KeyCode::Right => Edit::Right,
        KeyCode::Home => Edit::Home,
        KeyCode::End => Edit::End,
        _ => return vec![],
    };

    edit_field(state, field, edit);
    vec![]
}

fn edit_field(state: &mut AppState, field: FormField, edit: Edit) {
    let current = state.form.value(field);
    let (value, cursor) = input::apply(current, state.cursor(field), edit);
    let changed = edit.modifies() && value != current;
    state.set_cursor(field, cursor);
    if changed {
        handle_change(
            state,
            ChangeEvent {
                name: field.name(),
                value,
            },
        );
    }
}

/// Insert pasted text in one edit. Terminals deliver line breaks as `\r`,
/// `\r\n` or `\n`; all become `\n`, and single-line controls drop them.
fn paste_into_field(state: &mut AppState, field: FormField, text: &str) {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let pasted = if field.is_multiline() {
        normalized
    } else {
        normalized.replace('\n', "")
    };
    if pasted.is_empty() {
        return;
    }
    let (value, cursor) = input::insert_str(state.form.value(field), state.cursor(field), &pasted);
    state.set_cursor(field, cursor);
    handle_change(
        state,
        ChangeEvent {
            name: field.name(),
            value,
        },
    );
}

/// Mark the form torn down and settle whatever outcomes were already queued.
/// Returns how many were dropped.
pub fn teardown(state: &mut AppState, event_rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> usize {
    state.mounted = false;
    event_rx.close();
    let mut dropped = 0;
    while let Ok(event) = event_rx.try_recv() {
        if let AppEvent::MailResolved { seq, result } = event {
            submit::resolve(state, seq, result);
            dropped += 1;
        }
    }
    dropped
}
