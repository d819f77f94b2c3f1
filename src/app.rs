//! Application state and core logic

use crate::api::{ApiClient, MemorialApi};
use crate::config::MemorialConfig;
use crate::controller::{refresh_ane_width, refresh_sections, FormController};
use crate::state::{AppState, Focus, Section, Trigger, ANE_FIELD, DOCUMENT_TYPE_FIELD};
use crate::ui::{LiveView, Screen};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::cell::RefCell;
use std::time::Duration;

/// How often the screen refreshes while a request is in flight
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Server requests a key press can start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Upload,
    UploadImage,
    Generate,
    Excel,
}

impl From<Trigger> for Command {
    fn from(trigger: Trigger) -> Self {
        match trigger {
            Trigger::Upload => Self::Upload,
            Trigger::UploadImage => Self::UploadImage,
            Trigger::Generate => Self::Generate,
            Trigger::Excel => Self::Excel,
        }
    }
}

impl Command {
    fn trigger(&self) -> Trigger {
        match self {
            Self::Upload => Trigger::Upload,
            Self::UploadImage => Trigger::UploadImage,
            Self::Generate => Trigger::Generate,
            Self::Excel => Trigger::Excel,
        }
    }
}

/// Main application struct
pub struct App<A: MemorialApi = ApiClient> {
    /// Current application state
    pub state: AppState,
    controller: FormController<A>,
    /// Whether the app should quit
    quit: bool,
    /// Clipboard / browser feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App<ApiClient> {
    /// Create an App talking to the configured server
    pub fn new(config: &MemorialConfig) -> Result<Self> {
        let server_url = config.server_url();
        let api = ApiClient::new(&server_url)?;
        tracing::info!(%server_url, "memorial server configured");

        let state = AppState::new(api.base_url(), config.download_dir());
        Ok(Self::with_api(api, state))
    }
}

impl<A: MemorialApi> App<A> {
    /// Create an App over any backend; sections are evaluated once up front
    pub fn with_api(api: A, mut state: AppState) -> Self {
        refresh_sections(&mut state);
        Self {
            state,
            controller: FormController::new(api),
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Expire old notifications
    pub fn tick(&mut self) {
        self.state.notifications.prune_expired();
    }

    /// Handle a key press; returns the server request it asks for, if any
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<Command>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        self.status_message = None;

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => return Ok(self.request(Trigger::Generate)),
            KeyCode::Char('e') if ctrl => return Ok(self.request(Trigger::Excel)),
            KeyCode::Char('u') if ctrl => return Ok(self.request(Trigger::Upload)),
            KeyCode::Char('l') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_last_link()?;
            }
            KeyCode::Tab | KeyCode::Down => self.state.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus_prev(),
            KeyCode::Enter => match self.state.focus() {
                Focus::Button(trigger) => return Ok(self.request(trigger)),
                _ => self.state.focus_next(),
            },
            KeyCode::Left => self.change_option(false),
            KeyCode::Right => self.change_option(true),
            KeyCode::Char(' ') => {
                if let Some(field) = self.state.focused_field_mut() {
                    if field.is_text() {
                        field.push_char(' ');
                    } else {
                        field.toggle();
                    }
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = self.state.focused_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.focused_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(None)
    }

    /// A request for `trigger`, if its button is on screen and idle
    fn request(&self, trigger: Trigger) -> Option<Command> {
        let on_screen = match trigger {
            Trigger::Upload => self.state.form.is_section_visible(Section::Upload),
            Trigger::Excel => self.state.form.is_section_visible(Section::ExcelTrigger),
            Trigger::Generate | Trigger::UploadImage => true,
        };
        (on_screen && self.state.is_trigger_ready(trigger)).then(|| trigger.into())
    }

    fn change_option(&mut self, forward: bool) {
        let focus = self.state.focus();
        let Some(field) = self.state.focused_field_mut() else {
            return;
        };
        if forward {
            field.next_option();
        } else {
            field.prev_option();
        }
        let name = field.name.clone();

        if let Focus::Field(_) = focus {
            self.on_field_changed(&name, focus);
        }
    }

    /// Change handlers of the selectors that drive visibility
    fn on_field_changed(&mut self, name: &str, focus: Focus) {
        match name {
            DOCUMENT_TYPE_FIELD => refresh_sections(&mut self.state),
            ANE_FIELD => refresh_ane_width(&mut self.state),
            _ => return,
        }
        self.state.refocus(focus);
    }

    /// Run a server request. Notifications keep expiring and the screen keeps
    /// redrawing until the response arrives.
    pub async fn execute<B: Backend>(&mut self, command: Command, terminal: &mut Terminal<B>) {
        tracing::debug!(?command, "executing");
        {
            let screen = RefCell::new(Screen::new(terminal, &mut self.state));
            let mut view = LiveView::new(&screen);
            let controller = &self.controller;

            let handler = async {
                match command {
                    Command::Upload => controller.upload_files(&mut view).await,
                    Command::UploadImage => controller.upload_image(&mut view).await,
                    Command::Generate => controller.generate_document(&mut view).await,
                    Command::Excel => controller.generate_excel(&mut view).await,
                }
            };
            tokio::pin!(handler);

            let mut ticker = tokio::time::interval(TICK_INTERVAL);
            loop {
                tokio::select! {
                    () = &mut handler => break,
                    _ = ticker.tick() => screen.borrow_mut().tick(),
                }
            }
        }
        debug_assert!(self.state.is_trigger_ready(command.trigger()));

        self.open_pending_links();
    }

    /// Hand queued download links to the system browser
    fn open_pending_links(&mut self) {
        for link in std::mem::take(&mut self.state.pending_links) {
            match crate::platform::open_url(&link.url) {
                Ok(()) => {
                    self.status_message = Some(match &link.filename {
                        Some(name) => format!("Abrindo {name} no navegador"),
                        None => "Abrindo link no navegador".to_string(),
                    });
                }
                Err(e) => {
                    tracing::warn!("Failed to open {}: {e}", link.url);
                    self.status_message = Some(format!(
                        "Abra manualmente: {} ({} copia o link)",
                        link.url,
                        crate::platform::COPY_LINK_SHORTCUT
                    ));
                }
            }
        }
    }

    fn copy_last_link(&mut self) -> Result<()> {
        let Some(link) = self.state.last_link.clone() else {
            self.status_message = Some("Nenhum link para copiar".to_string());
            return Ok(());
        };
        match copy_to_clipboard(&link) {
            Ok(()) => self.status_message = Some(format!("Link copiado: {link}")),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {e}");
                self.status_message = Some(format!("Não foi possível copiar: {link}"));
            }
        }
        Ok(())
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
