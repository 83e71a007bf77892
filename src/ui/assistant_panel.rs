//! Assistant question/reply overlay

use super::layout::centered_rect;
use crate::app::App;
use crate::schema;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Draw the assistant overlay for the open exchange
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(exchange) = &app.state.session.exchange else {
        return;
    };

    let popup = centered_rect(80, 70, area);
    frame.render_widget(Clear, popup);

    let title = schema::SECTIONS
        .iter()
        .find(|s| s.id == exchange.section_id)
        .map(|s| format!(" Ask Assistant ({}: {}) ", s.id, s.title))
        .unwrap_or_else(|| format!(" Ask Assistant ({}) ", exchange.section_id));

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Question
            Constraint::Min(3),    // Reply
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    let question = Paragraph::new(Line::from(vec![
        Span::raw(exchange.question.clone()),
        Span::styled("▌", Style::default().fg(Color::Cyan)),
    ]))
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .title(" Question ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(question, chunks[0]);

    let reply_text = if exchange.waiting {
        "Waiting for the assistant...".to_string()
    } else {
        exchange.reply.clone().unwrap_or_default()
    };
    let reply = Paragraph::new(reply_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Reply ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(reply, chunks[1]);

    let hint = if exchange.reply.is_some() {
        "Ctrl+Y inserts the reply into this section"
    } else {
        "Enter sends the question"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
        chunks[2],
    );
}
