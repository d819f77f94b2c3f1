//! The memorial form: visible fields in a scrolling column

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::state::{AppState, FieldGroup, Focus};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// First row to draw so that `focused` stays on screen
pub(crate) fn scroll_offset(focused: Option<usize>, total: usize, capacity: usize) -> usize {
    if capacity == 0 || total <= capacity {
        return 0;
    }
    match focused {
        Some(pos) if pos >= capacity => (pos + 1 - capacity).min(total - capacity),
        _ => 0,
    }
}

fn section_tag(group: FieldGroup) -> Option<&'static str> {
    match group {
        FieldGroup::General => None,
        FieldGroup::Section(section) => Some(section.title()),
        FieldGroup::AneWidth => Some("Área Não Edificante"),
    }
}

pub fn draw_memorial_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Memorial ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = state.form.visible_field_indices();
    let focused_field = match state.focus() {
        Focus::Field(index) => Some(index),
        _ => None,
    };
    let focused_pos = focused_field.and_then(|i| visible.iter().position(|&v| v == i));

    let capacity = (inner.height / FIELD_HEIGHT) as usize;
    let offset = scroll_offset(focused_pos, visible.len(), capacity);

    for (row, &index) in visible.iter().skip(offset).take(capacity).enumerate() {
        let field = &state.form.fields[index];
        let field_area = Rect {
            x: inner.x,
            y: inner.y + row as u16 * FIELD_HEIGHT,
            width: inner.width,
            height: FIELD_HEIGHT,
        };
        draw_field(
            frame,
            field_area,
            field,
            section_tag(field.group),
            focused_field == Some(index),
        );
    }
}
