//! Layout components (form column, side panel, status bar)

use super::forms::field_hint;
use crate::platform;
use crate::state::{AppState, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the side panel
const PANEL_WIDTH: u16 = 40;

/// Split the screen into the form column and the side panel
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),              // Form
            Constraint::Length(PANEL_WIDTH), // Panel
        ])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, state: &AppState, status_message: Option<&str>) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", state.server_url),
        Style::default().fg(Color::Green),
    )];

    if let Some(message) = status_message {
        spans.push(Span::styled(
            format!("{message} "),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        let hint = match state.focus() {
            Focus::Field(index) => state.form.fields.get(index).map(field_hint),
            Focus::UploadPaths | Focus::ImagePath => Some("caminhos locais"),
            Focus::ImageKind => Some("←/→ alterna tipo"),
            Focus::Button(_) => Some("Enter ativa"),
        };
        if let Some(hint) = hint {
            spans.push(Span::styled(
                format!("{hint} │ "),
                Style::default().fg(Color::Gray),
            ));
        }
        spans.push(Span::styled(
            format!(
                "Tab: próximo │ {}: DOCX │ {}: Excel │ {}: copiar link",
                platform::GENERATE_SHORTCUT,
                platform::EXCEL_SHORTCUT,
                platform::COPY_LINK_SHORTCUT
            ),
            Style::default().fg(Color::Gray),
        ));
    }

    spans.push(Span::styled(
        format!(" │ → {}", state.download_dir.display()),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " Esc:sair ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
