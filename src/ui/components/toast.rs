//! Notification toasts stacked in the top-right corner

use crate::state::{NotificationKind, Notifications};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_WIDTH: u16 = 48;

fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    }
}

/// Draw live notifications, newest at the top, over whatever is beneath
pub fn render_notifications(frame: &mut Frame, notifications: &Notifications) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);
    let text_width = width.saturating_sub(4) as usize;
    let mut y = area.y + 1;

    for notification in notifications.iter().collect::<Vec<_>>().into_iter().rev() {
        let lines = wrap_text(&notification.message, text_width.max(1));
        let height = lines.len() as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }

        let toast_area = Rect {
            x: area.x + area.width - width,
            y,
            width,
            height,
        };
        frame.render_widget(Clear, toast_area);

        let color = kind_color(notification.kind);
        let content: Vec<Line> = lines.into_iter().map(Line::from).collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", notification.shown_at.format("%H:%M:%S")),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(Color::Black));

        frame.render_widget(
            Paragraph::new(content)
                .block(block)
                .style(Style::default().bg(Color::Black)),
            toast_area,
        );
        y += height;
    }
}

/// Wrap text to fit within a maximum width
pub(crate) fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            let word_len = word.chars().count();
            if current_len == 0 {
                current_line = word.to_string();
            } else if current_len + 1 + word_len <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current_line));
                current_line = word.to_string();
            }
        }
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_counts_characters_not_bytes() {
        assert_eq!(
            wrap_text("Não foi possível gerar", 12),
            vec!["Não foi", "possível", "gerar"]
        );
    }

    #[test]
    fn test_wrap_keeps_explicit_breaks() {
        assert_eq!(wrap_text("um\ndois", 40), vec!["um", "dois"]);
    }

    #[test]
    fn test_long_word_gets_own_line() {
        assert_eq!(
            wrap_text("ver http://localhost:5000/api/download/x.docx", 10),
            vec!["ver", "http://localhost:5000/api/download/x.docx"]
        );
    }
}
