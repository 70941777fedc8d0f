use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// One line under the button: green on success, red on error, nothing
/// otherwise.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let span = match state.form.feedback() {
        Feedback::None => return,
        Feedback::Success(text) => Span::styled(text.as_str(), Theme::success_message()),
        Feedback::Error(text) => Span::styled(text.as_str(), Theme::error_message()),
    };
    frame.render_widget(Paragraph::new(span), area);
}
