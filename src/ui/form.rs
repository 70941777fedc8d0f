//! The four controls and the send button.
//!
//! Each control shows its visible label above a bordered box titled with its
//! accessible name. Empty controls show their placeholder. Only the focused
//! control places the terminal cursor.

use crate::app::state::*;
use crate::ui::layout::AppLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, layout: &AppLayout, state: &AppState) {
    for (field, (label_area, input_area)) in FormField::ALL.into_iter().zip(layout.fields) {
        frame.render_widget(
            Paragraph::new(Span::styled(field.label(), Theme::label())),
            label_area,
        );
        render_control(frame, input_area, state, field);
    }
    render_button(frame, layout.button, state);
}

fn render_control(frame: &mut Frame, area: Rect, state: &AppState, field: FormField) {
    let focused = state.focus == Focus::Field(field);
    let block = Block::default()
        .title(format!(" {} ", field.accessible_name()))
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let value = state.form.value(field);
    let (row, col) = cursor_position(value, state.cursor(field));
    let scroll_y = row.saturating_sub(inner.height - 1);
    let scroll_x = col.saturating_sub(inner.width - 1);

    let paragraph = if value.is_empty() {
        Paragraph::new(field.placeholder().unwrap_or_default()).style(Theme::placeholder())
    } else {
        let lines: Vec<Line> = value.split('\n').map(Line::raw).collect();
        Paragraph::new(lines)
            .style(Theme::input_text())
            .scroll((scroll_y, scroll_x))
    };
    frame.render_widget(paragraph, inner);

    if focused {
        frame.set_cursor_position((inner.x + col - scroll_x, inner.y + row - scroll_y));
    }
}

fn render_button(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::SendButton;
    let style = if focused {
        Theme::button_focused()
    } else {
        Theme::button()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .style(style);
    let button = Paragraph::new("Send Message")
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}

/// Row and display column of byte offset `cursor` within `value`.
pub fn cursor_position(value: &str, cursor: usize) -> (u16, u16) {
    let before = &value[..cursor.min(value.len())];
    let row = before.matches('\n').count();
    let line = before.rsplit('\n').next().unwrap_or("");
    (row as u16, line.width() as u16)
}
