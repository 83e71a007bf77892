//! Layout components (sidebar, status bar)

use crate::app::App;
use crate::schema;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    (chunks[0], main_chunks[0])
}

/// Draw the sidebar: form progress and reference document status
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let completed = app.state.session.store.completed_sections();
    let total = schema::section_count();

    let reference_line = match &app.state.session.reference {
        Some(doc) => Line::from(vec![
            Span::styled("Reference: ", Style::default().fg(Color::DarkGray)),
            Span::styled(doc.name.clone(), Style::default().fg(Color::Green)),
        ]),
        None => Line::from(Span::styled(
            "Reference: (none)",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let lines = vec![
        Line::from(Span::styled(
            "Form Progress",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(format!("Sections Completed: {completed} / {total}")),
        Line::default(),
        reference_line,
        Line::default(),
        Line::from(Span::styled(
            "r load reference",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "e export markdown",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Intake ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the status bar on the bottom line
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(message) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}

fn get_view_hints(view: &View) -> &'static str {
    match view {
        View::Sections => " ↑/↓ select | Enter open | a assistant | r reference | e export | q quit",
        View::SectionForm => " Tab/Shift+Tab field | Space toggle | Ctrl+A assistant | Esc back",
        View::Assistant => " type question | Enter ask | Ctrl+Y insert reply | Esc close",
        View::ReferencePrompt => " type path to .md file | Enter load | Esc cancel",
    }
}

/// Centered popup rect used by the assistant overlay and the reference prompt
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
