//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by one field (borders + value)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a form field; `tag` is appended to the title to name its section
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, tag: Option<&str>, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(vazio)".to_string()
    } else {
        display_value
    };

    // Only free text takes a cursor
    let cursor = if is_active && field.is_text() { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let title = match tag {
        Some(tag) => format!(" {} · {tag} ", field.label),
        None => format!(" {} ", field.label),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Key hint for the focused field's control kind
pub fn field_hint(field: &FormField) -> &'static str {
    match field.value {
        FieldValue::Text(_) => "digite para editar",
        FieldValue::Select { .. } => "←/→ alterna opção",
        FieldValue::Checkbox(_) => "Espaço marca",
        FieldValue::MultiSelect { .. } => "←/→ move · Espaço marca",
    }
}
