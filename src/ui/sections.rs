//! Section overview list and section form rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::schema;
use crate::state::FieldValue;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the overview: all 12 sections with completion markers
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = schema::SECTIONS
        .iter()
        .map(|section| {
            let complete = section_complete(app, section.id);
            let marker = if complete {
                Span::styled("● ", Style::default().fg(Color::Green))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            };
            ListItem::new(Line::from(vec![
                marker,
                Span::raw(format!("{}: {}", section.id, section.title)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Health Universe App Intake ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default();
    list_state.select(Some(app.state.selected_section));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn section_complete(app: &App, section_id: &str) -> bool {
    app.state
        .session
        .store
        .iter()
        .any(|(id, fields)| id == section_id && fields.values().any(FieldValue::is_truthy))
}

/// Draw the form for the selected section, one widget per field
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let section = app.current_section();

    let block = Block::default()
        .title(format!(" {}: {} ", section.id, section.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = section
        .fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Min(0)); // trailing flex

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, field) in section.fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            section.id,
            field,
            &app.state.session.store,
            app.state.active_field == idx,
            app.state.option_cursor,
        );
    }
}

/// Draw the reference path prompt as a small popup
pub fn draw_reference_prompt(frame: &mut Frame, area: Rect, app: &App) {
    let popup = super::layout::centered_rect(70, 20, area);
    frame.render_widget(ratatui::widgets::Clear, popup);

    let lines = vec![
        Line::from("Path to a Markdown reference file:"),
        Line::from(vec![
            Span::raw(app.state.reference_input.clone()),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ]),
    ];
    let block = Block::default()
        .title(" Load Reference ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
