//! Field rendering by kind

use crate::schema::{FieldKind, FieldSpec};
use crate::state::{FieldValue, FormStore};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one field of a section, pulling its current value from the store.
/// `option_cursor` is the highlighted option for radio/multiselect fields.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    section_id: &str,
    field: &FieldSpec,
    store: &FormStore,
    is_active: bool,
    option_cursor: usize,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    let value = store.get(section_id, field.key);
    let content = match field.kind {
        FieldKind::Text { placeholder } => text_lines(value, placeholder, is_active),
        FieldKind::Radio { options } => {
            vec![choice_line(options, value, is_active, option_cursor, false)]
        }
        FieldKind::Checkbox => vec![checkbox_line(value)],
        FieldKind::MultiSelect { options } => {
            vec![choice_line(options, value, is_active, option_cursor, true)]
        }
    };

    frame.render_widget(
        Paragraph::new(content).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn text_lines(value: Option<&FieldValue>, placeholder: &str, is_active: bool) -> Vec<Line<'static>> {
    let text = value.map(|v| v.as_text().to_string()).unwrap_or_default();

    // Absent and empty display identically: as the placeholder hint
    if text.is_empty() {
        let hint = if placeholder.is_empty() { "(empty)" } else { placeholder };
        let mut spans = vec![Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )];
        if is_active {
            spans.insert(0, Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
        return vec![Line::from(spans)];
    }

    let mut lines: Vec<Line> = text.lines().map(|l| Line::from(l.to_string())).collect();
    if text.ends_with('\n') {
        lines.push(Line::default());
    }
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
    }
    lines
}

/// One line of options with selection markers. Radios mark the stored choice
/// (or the implied first-option default); multiselects mark every pick.
fn choice_line(
    options: &'static [&'static str],
    value: Option<&FieldValue>,
    is_active: bool,
    option_cursor: usize,
    multi: bool,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for (idx, option) in options.iter().enumerate() {
        let marked = match value {
            Some(FieldValue::Choice(c)) => c == option,
            Some(v) if multi => v.has_selection(option),
            // Unset radio displays the implied default without storing it
            None if !multi => idx == 0,
            _ => false,
        };
        let marker = match (multi, marked) {
            (true, true) => "[x] ",
            (true, false) => "[ ] ",
            (false, true) => "(•) ",
            (false, false) => "( ) ",
        };

        let mut style = if marked {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        if is_active && idx == option_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        spans.push(Span::styled(format!("{marker}{option}"), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn checkbox_line(value: Option<&FieldValue>) -> Line<'static> {
    let checked = matches!(value, Some(FieldValue::Flag(true)));
    let (marker, style) = if checked {
        ("[x] Yes", Style::default().fg(Color::Green))
    } else {
        ("[ ] No", Style::default().fg(Color::Gray))
    };
    Line::from(Span::styled(marker, style))
}

/// Rows of vertical space a field needs inside the form
pub fn field_height(field: &FieldSpec) -> u16 {
    match field.kind {
        // Bordered multiline text area
        FieldKind::Text { .. } => 5,
        _ => 3,
    }
}
