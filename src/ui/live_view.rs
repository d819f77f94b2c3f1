//! The on-screen view handed to the controller while a request runs

use crate::api::ImageKind;
use crate::controller::ViewBinding;
use crate::state::{
    AppState, DownloadLink, NotificationKind, Section, Trigger, TriggerState, UploadStatus,
};
use anyhow::Result;
use ratatui::{backend::Backend, Terminal};
use std::cell::RefCell;
use std::path::PathBuf;

/// Terminal and app state, borrowed together for the length of a request
pub struct Screen<'s, B: Backend> {
    terminal: &'s mut Terminal<B>,
    state: &'s mut AppState,
}

impl<'s, B: Backend> Screen<'s, B> {
    pub fn new(terminal: &'s mut Terminal<B>, state: &'s mut AppState) -> Self {
        Self { terminal, state }
    }

    pub fn draw(&mut self) {
        let state = &*self.state;
        if let Err(e) = self.terminal.draw(|frame| super::draw(frame, state, None)) {
            tracing::warn!("Repaint failed: {e}");
        }
    }

    /// Expire notifications and redraw
    pub fn tick(&mut self) {
        self.state.notifications.prune_expired();
        self.draw();
    }
}

/// App state bound to the terminal, so the controller can redraw mid-request.
///
/// The screen is shared with the tick loop running beside the handler; each
/// call borrows it only for its own duration, never across an await.
pub struct LiveView<'v, 's, B: Backend> {
    screen: &'v RefCell<Screen<'s, B>>,
}

impl<'v, 's, B: Backend> LiveView<'v, 's, B> {
    pub fn new(screen: &'v RefCell<Screen<'s, B>>) -> Self {
        Self { screen }
    }

    fn state(&self) -> std::cell::Ref<'_, AppState> {
        std::cell::Ref::map(self.screen.borrow(), |screen| &*screen.state)
    }

    fn state_mut(&self) -> std::cell::RefMut<'_, AppState> {
        std::cell::RefMut::map(self.screen.borrow_mut(), |screen| &mut *screen.state)
    }
}

impl<B: Backend> ViewBinding for LiveView<'_, '_, B> {
    fn document_type(&self) -> String {
        self.state().document_type()
    }

    fn ane_choice(&self) -> String {
        self.state().ane_choice()
    }

    fn set_section_visible(&mut self, section: Section, visible: bool) {
        self.state_mut().set_section_visible(section, visible);
    }

    fn set_ane_width_visible(&mut self, visible: bool) {
        self.state_mut().set_ane_width_visible(visible);
    }

    fn selected_files(&self) -> Vec<PathBuf> {
        self.state().selected_files()
    }

    fn selected_image(&self) -> Option<(PathBuf, ImageKind)> {
        self.state().selected_image()
    }

    fn set_trigger(&mut self, trigger: Trigger, state: TriggerState) {
        self.state_mut().set_trigger(trigger, state);
    }

    fn set_upload_status(&mut self, status: UploadStatus) {
        self.state_mut().set_upload_status(status);
    }

    fn form_entries(&self) -> Vec<(String, String)> {
        self.state().form_entries()
    }

    fn is_checked(&self, name: &str) -> bool {
        self.state().is_checked(name)
    }

    fn selected_usos(&self) -> Option<Vec<String>> {
        self.state().selected_usos()
    }

    fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.state_mut().notify(kind, message);
    }

    fn save_download(&mut self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        self.state_mut().save_download(filename, bytes)
    }

    fn open_link(&mut self, link: DownloadLink) {
        self.state_mut().open_link(link);
    }

    fn repaint(&mut self) {
        self.screen.borrow_mut().draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_repaint_shows_busy_label_immediately() {
        let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
        let mut state = AppState::new("http://localhost:5000", PathBuf::from("/tmp"));
        {
            let screen = RefCell::new(Screen::new(&mut terminal, &mut state));
            let mut view = LiveView::new(&screen);
            view.set_trigger(Trigger::UploadImage, TriggerState::Busy);
            view.repaint();
        }

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Enviando..."));
        assert!(!state.is_trigger_ready(Trigger::UploadImage));
    }
}
