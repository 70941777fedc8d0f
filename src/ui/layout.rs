use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Text rows of the message area inside its border.
pub const MESSAGE_ROWS: u16 = 6;
const FORM_WIDTH: u16 = 72;

pub struct AppLayout {
    pub title: Rect,
    /// Label row + input box, in field order.
    pub fields: [(Rect, Rect); 4],
    pub button: Rect,
    pub feedback: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Center the form horizontally
    let [column] = Layout::horizontal([Constraint::Max(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(content);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                // Title + gap
            Constraint::Length(1),                // Name label
            Constraint::Length(3),                // Name input
            Constraint::Length(1),                // Email label
            Constraint::Length(3),                // Email input
            Constraint::Length(1),                // Subject label
            Constraint::Length(3),                // Subject input
            Constraint::Length(1),                // Message label
            Constraint::Length(MESSAGE_ROWS + 2), // Message area
            Constraint::Length(1),                // Gap
            Constraint::Length(3),                // Button
            Constraint::Length(1),                // Feedback line
            Constraint::Min(0),
        ])
        .split(column);

    let button = Layout::horizontal([Constraint::Length(18), Constraint::Min(0)]).split(rows[10])[0];

    AppLayout {
        title: rows[0],
        fields: [
            (rows[1], rows[2]),
            (rows[3], rows[4]),
            (rows[5], rows[6]),
            (rows[7], rows[8]),
        ],
        button,
        feedback: rows[11],
        status_bar,
    }
}
