use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HINTS: &str = "Tab next | Shift-Tab prev | Ctrl-S send | Esc quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let phase_style = if state.phase == SubmissionPhase::Pending {
        Theme::status_pending()
    } else {
        Theme::status_bar()
    };
    parts.push(Span::styled(format!(" {} ", state.status_line()), phase_style));
    parts.push(Span::styled(format!("| {} ", HINTS), Theme::status_bar()));

    // Focus indicator
    let focus_name = match state.focus {
        Focus::Field(field) => field.accessible_name(),
        Focus::SendButton => "Send Message",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
