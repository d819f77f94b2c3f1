//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a trigger button; a busy button is drawn dimmed and yellow
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, is_selected: bool, is_busy: bool) {
    let border_style = if is_busy {
        Style::default().fg(Color::Yellow)
    } else if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_busy {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::DIM)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a button with its keyboard shortcut in front of the label
pub fn render_shortcut_button(
    frame: &mut Frame,
    area: Rect,
    key: Option<&str>,
    label: &str,
    is_selected: bool,
    is_busy: bool,
) {
    let content = match key {
        Some(key) => format!("{key} {label}"),
        None => label.to_string(),
    };
    render_button(frame, area, &content, is_selected, is_busy);
}
