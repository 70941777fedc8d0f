use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::White).bg(Color::Indexed(61))
    }

    pub fn button_focused() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::Indexed(62))
            .add_modifier(Modifier::BOLD)
    }

    pub fn success_message() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_pending() -> Style {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    }
}
