//! Side panel: survey file upload, image upload and the generate buttons

use super::components::{render_shortcut_button, BUTTON_HEIGHT};
use super::forms::{draw_field, FIELD_HEIGHT};
use crate::platform;
use crate::state::{AppState, Focus, Section, Trigger, TriggerState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Panel items in screen order
enum Item {
    UploadPaths,
    Button(Trigger),
    UploadStatus,
    ImagePath,
    ImageKind,
    LastDownload,
}

fn items(state: &AppState) -> Vec<Item> {
    let mut items = Vec::new();
    if state.form.is_section_visible(Section::Upload) {
        items.push(Item::UploadPaths);
        items.push(Item::Button(Trigger::Upload));
        if state.upload_status.is_some() {
            items.push(Item::UploadStatus);
        }
    }
    items.push(Item::ImagePath);
    items.push(Item::ImageKind);
    items.push(Item::Button(Trigger::UploadImage));
    items.push(Item::Button(Trigger::Generate));
    if state.form.is_section_visible(Section::ExcelTrigger) {
        items.push(Item::Button(Trigger::Excel));
    }
    if state.last_download.is_some() {
        items.push(Item::LastDownload);
    }
    items
}

fn height(item: &Item, state: &AppState) -> u16 {
    match item {
        Item::UploadPaths | Item::ImagePath | Item::ImageKind => FIELD_HEIGHT,
        Item::Button(_) => BUTTON_HEIGHT,
        Item::UploadStatus => state
            .upload_status
            .as_ref()
            .map_or(0, |s| s.files.len().min(6) as u16 + 3),
        Item::LastDownload => 3,
    }
}

fn shortcut(trigger: Trigger) -> Option<&'static str> {
    match trigger {
        Trigger::Upload => Some(platform::UPLOAD_SHORTCUT),
        Trigger::Generate => Some(platform::GENERATE_SHORTCUT),
        Trigger::Excel => Some(platform::EXCEL_SHORTCUT),
        Trigger::UploadImage => None,
    }
}

pub fn draw_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let items = items(state);
    let mut constraints: Vec<Constraint> = items
        .iter()
        .map(|item| Constraint::Length(height(item, state)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let focus = state.focus();
    for (item, chunk) in items.iter().zip(chunks.iter()) {
        match item {
            Item::UploadPaths => {
                draw_field(frame, *chunk, &state.upload_paths, None, focus == Focus::UploadPaths)
            }
            Item::ImagePath => {
                draw_field(frame, *chunk, &state.image_path, None, focus == Focus::ImagePath)
            }
            Item::ImageKind => {
                draw_field(frame, *chunk, &state.image_kind, None, focus == Focus::ImageKind)
            }
            Item::Button(trigger) => render_shortcut_button(
                frame,
                *chunk,
                shortcut(*trigger),
                state.trigger_label(*trigger),
                focus == Focus::Button(*trigger),
                state.trigger_state(*trigger) == TriggerState::Busy,
            ),
            Item::UploadStatus => draw_upload_status(frame, *chunk, state),
            Item::LastDownload => draw_last_download(frame, *chunk, state),
        }
    }
}

fn draw_upload_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(status) = &state.upload_status else {
        return;
    };

    let mut lines = vec![Line::from(format!(
        "{} arquivo(s) enviado(s):",
        status.count
    ))];
    lines.extend(status.files.iter().map(|f| Line::from(format!("• {f}"))));

    let block = Block::default()
        .title(format!(" {} ", Section::Upload.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_last_download(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(path) = &state.last_download else {
        return;
    };
    let block = Block::default()
        .title(" Último documento ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(path.display().to_string()).block(block),
        area,
    );
}
