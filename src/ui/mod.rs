//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod live_view;
mod panel;

pub use live_view::{LiveView, Screen};

use crate::state::AppState;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState, status_message: Option<&str>) {
    let area = frame.area();

    let (form_area, panel_area) = layout::create_layout(area);

    forms::draw_memorial_form(frame, form_area, state);
    panel::draw_panel(frame, panel_area, state);

    // Draw status bar
    layout::draw_status_bar(frame, state, status_message);

    // Toasts go on top of everything
    components::render_notifications(frame, &state.notifications);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ViewBinding;
    use crate::state::{NotificationKind, Section, Trigger, TriggerState};
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn render(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
        terminal.draw(|f| draw(f, state, None)).unwrap();
        screen_text(&terminal)
    }

    fn state() -> AppState {
        AppState::new("http://localhost:5000", PathBuf::from("/tmp"))
    }

    #[test]
    fn test_hidden_sections_are_not_drawn() {
        let mut state = state();
        state.set_section_visible(Section::Summary, false);
        let screen = render(&state);
        assert!(!screen.contains("Tipo de projeto"));
        assert!(!screen.contains("Baixar Excel"));
        assert!(screen.contains("Gerar DOCX"));
    }

    #[test]
    fn test_visible_section_is_drawn() {
        let mut state = state();
        state.set_section_visible(Section::ExcelTrigger, true);
        state.set_section_visible(Section::Upload, true);
        let screen = render(&state);
        assert!(screen.contains("Baixar Excel"));
        assert!(screen.contains("Anexar Arquivos"));
    }

    #[test]
    fn test_busy_label_is_drawn() {
        let mut state = state();
        state.set_trigger(Trigger::Generate, TriggerState::Busy);
        assert!(render(&state).contains("Gerando..."));
    }

    #[test]
    fn test_notification_is_drawn() {
        let mut state = state();
        state.notify(NotificationKind::Success, "Imagem enviada");
        assert!(render(&state).contains("Imagem enviada"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut state = state();
        state.notify(NotificationKind::Error, "Erro ao gerar documento: falhou");
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|f| draw(f, &state, Some("ok"))).unwrap();
    }
}
