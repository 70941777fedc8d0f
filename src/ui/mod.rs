mod feedback;
mod form;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    frame.render_widget(
        Paragraph::new(Span::styled("Contact Form", theme::Theme::title())),
        app_layout.title,
    );
    form::render(frame, &app_layout, state);
    feedback::render(frame, app_layout.feedback, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{FormField, SubmissionPhase};
    use crate::app::submit;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 32)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn contains(screen: &[String], text: &str) -> bool {
        screen.iter().any(|line| line.contains(text))
    }

    #[test]
    fn test_renders_labels_placeholders_and_button() {
        let state = AppState::new(AppConfig::default());
        let screen = draw(&state);
        assert!(contains(&screen, "Contact Form"));
        for label in ["Full Name", "Email", "Subject", "Message"] {
            assert!(contains(&screen, label), "missing label {}", label);
        }
        assert!(contains(&screen, "Your Name"));
        assert!(contains(&screen, "Your email"));
        assert!(contains(&screen, "Send Message"));
        assert!(!contains(&screen, submit::REQUIRED_MESSAGE));
    }

    #[test]
    fn test_renders_values_and_feedback() {
        let mut state = AppState::new(AppConfig::default());
        state.form.set_field(FormField::Name, "Ana".into());
        state.form.set_field(FormField::Message, "first\nsecond".into());
        state.form.set_error(submit::FAILED_MESSAGE);
        let screen = draw(&state);
        assert!(contains(&screen, "Ana"));
        assert!(contains(&screen, "first"));
        assert!(contains(&screen, "second"));
        assert!(contains(&screen, submit::FAILED_MESSAGE));
        assert!(!contains(&screen, "Your Name"));

        state.form.set_success(submit::SENT_MESSAGE);
        let screen = draw(&state);
        assert!(contains(&screen, submit::SENT_MESSAGE));
        assert!(!contains(&screen, submit::FAILED_MESSAGE));
    }

    #[test]
    fn test_status_bar_shows_pending() {
        let mut state = AppState::new(AppConfig::default());
        state.phase = SubmissionPhase::Pending;
        let screen = draw(&state);
        assert!(contains(&screen, "Sending"));
    }
}
