//! Application state definitions

use super::downloads::save_document;
use super::forms::{FieldGroup, FormField, MemorialForm};
use super::forms::{ANE_FIELD, DOCUMENT_TYPE_FIELD, USOS_FIELD};
use super::notifications::{NotificationKind, Notifications};
use super::Section;
use crate::api::ImageKind;
use crate::controller::ViewBinding;
use anyhow::Result;
use std::path::PathBuf;

/// Buttons that start a server request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Upload,
    Generate,
    Excel,
    UploadImage,
}

impl Trigger {
    pub const ALL: [Trigger; 4] = [Self::Upload, Self::Generate, Self::Excel, Self::UploadImage];

    /// Label shown while the button is idle
    pub fn idle_label(&self) -> &'static str {
        match self {
            Self::Upload => "Anexar Arquivos",
            Self::Generate => "Gerar DOCX",
            Self::Excel => "Baixar Excel",
            Self::UploadImage => "Enviar Imagem",
        }
    }

    /// Label shown while a request is in flight
    pub fn busy_label(&self) -> &'static str {
        match self {
            Self::Upload | Self::UploadImage => "Enviando...",
            Self::Generate | Self::Excel => "Gerando...",
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Upload => 0,
            Self::Generate => 1,
            Self::Excel => 2,
            Self::UploadImage => 3,
        }
    }
}

/// Whether a trigger accepts presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    #[default]
    Ready,
    Busy,
}

/// Contents of the upload status panel after a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadStatus {
    pub count: usize,
    pub files: Vec<String>,
}

/// A link the user's browser should follow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub url: String,
    pub filename: Option<String>,
    /// Open in a new browser tab instead of downloading in place
    pub new_tab: bool,
}

/// Focusable items on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Index into `MemorialForm::fields`
    Field(usize),
    UploadPaths,
    ImagePath,
    ImageKind,
    Button(Trigger),
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: MemorialForm,
    /// Local paths to upload, separated by `;` or new lines
    pub upload_paths: FormField,
    pub image_path: FormField,
    pub image_kind: FormField,
    triggers: [TriggerState; 4],
    pub upload_status: Option<UploadStatus>,
    pub notifications: Notifications,
    /// Links waiting to be handed to the system browser
    pub pending_links: Vec<DownloadLink>,
    /// Most recent link followed, for copying to the clipboard
    pub last_link: Option<String>,
    pub last_download: Option<PathBuf>,
    pub download_dir: PathBuf,
    pub server_url: String,
    /// Position in `focus_ring()`
    pub focus_index: usize,
}

impl AppState {
    pub fn new(server_url: impl Into<String>, download_dir: PathBuf) -> Self {
        let image_kinds: Vec<(&str, &str)> = ImageKind::ALL
            .iter()
            .map(|k| (k.as_str(), k.label()))
            .collect();

        Self {
            form: MemorialForm::new(),
            upload_paths: FormField::text(
                "files",
                "Arquivos (separe com ;)",
                FieldGroup::Section(Section::Upload),
            ),
            image_path: FormField::text("image", "Imagem", FieldGroup::General),
            image_kind: FormField::select("type", "Tipo de imagem", &image_kinds, FieldGroup::General),
            triggers: [TriggerState::Ready; 4],
            upload_status: None,
            notifications: Notifications::default(),
            pending_links: Vec::new(),
            last_link: None,
            last_download: None,
            download_dir,
            server_url: server_url.into(),
            focus_index: 0,
        }
    }

    pub fn trigger_state(&self, trigger: Trigger) -> TriggerState {
        self.triggers[trigger.index()]
    }

    pub fn trigger_label(&self, trigger: Trigger) -> &'static str {
        match self.trigger_state(trigger) {
            TriggerState::Ready => trigger.idle_label(),
            TriggerState::Busy => trigger.busy_label(),
        }
    }

    pub fn is_trigger_ready(&self, trigger: Trigger) -> bool {
        self.trigger_state(trigger) == TriggerState::Ready
    }

    /// Focusable items in screen order; hidden groups are skipped
    pub fn focus_ring(&self) -> Vec<Focus> {
        let mut ring: Vec<Focus> = self
            .form
            .visible_field_indices()
            .into_iter()
            .map(Focus::Field)
            .collect();

        if self.form.is_section_visible(Section::Upload) {
            ring.push(Focus::UploadPaths);
            ring.push(Focus::Button(Trigger::Upload));
        }
        ring.push(Focus::ImagePath);
        ring.push(Focus::ImageKind);
        ring.push(Focus::Button(Trigger::UploadImage));
        ring.push(Focus::Button(Trigger::Generate));
        if self.form.is_section_visible(Section::ExcelTrigger) {
            ring.push(Focus::Button(Trigger::Excel));
        }
        ring
    }

    pub fn focus(&self) -> Focus {
        let ring = self.focus_ring();
        ring.get(self.focus_index.min(ring.len().saturating_sub(1)))
            .copied()
            .unwrap_or(Focus::Button(Trigger::Generate))
    }

    pub fn focus_next(&mut self) {
        let len = self.focus_ring().len();
        if len > 0 {
            self.focus_index = (self.focus_index.min(len - 1) + 1) % len;
        }
    }

    pub fn focus_prev(&mut self) {
        let len = self.focus_ring().len();
        if len > 0 {
            let current = self.focus_index.min(len - 1);
            self.focus_index = current.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Keep focus on the same item after the ring changed shape
    pub fn refocus(&mut self, previous: Focus) {
        let ring = self.focus_ring();
        self.focus_index = ring
            .iter()
            .position(|f| *f == previous)
            .unwrap_or_else(|| self.focus_index.min(ring.len().saturating_sub(1)));
    }

    /// The field under focus, if the focus is on an editable control
    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus() {
            Focus::Field(i) => self.form.fields.get_mut(i),
            Focus::UploadPaths => Some(&mut self.upload_paths),
            Focus::ImagePath => Some(&mut self.image_path),
            Focus::ImageKind => Some(&mut self.image_kind),
            Focus::Button(_) => None,
        }
    }
}

impl ViewBinding for AppState {
    fn document_type(&self) -> String {
        self.form.value_of(DOCUMENT_TYPE_FIELD)
    }

    fn ane_choice(&self) -> String {
        self.form.value_of(ANE_FIELD)
    }

    fn set_section_visible(&mut self, section: Section, visible: bool) {
        self.form.set_section_visible(section, visible);
    }

    fn set_ane_width_visible(&mut self, visible: bool) {
        self.form.set_ane_width_visible(visible);
    }

    fn selected_files(&self) -> Vec<PathBuf> {
        self.upload_paths
            .value()
            .split([';', '\n'])
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .collect()
    }

    fn selected_image(&self) -> Option<(PathBuf, ImageKind)> {
        let path = self.image_path.value();
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        let kind = ImageKind::from_value(&self.image_kind.value()).unwrap_or_default();
        Some((PathBuf::from(path), kind))
    }

    fn set_trigger(&mut self, trigger: Trigger, state: TriggerState) {
        self.triggers[trigger.index()] = state;
    }

    fn set_upload_status(&mut self, status: UploadStatus) {
        self.upload_status = Some(status);
    }

    fn form_entries(&self) -> Vec<(String, String)> {
        self.form.entries()
    }

    fn is_checked(&self, name: &str) -> bool {
        self.form.field(name).is_some_and(FormField::is_checked)
    }

    fn selected_usos(&self) -> Option<Vec<String>> {
        self.form.field(USOS_FIELD).map(FormField::selected_values)
    }

    fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.notifications.push(kind, message);
    }

    fn save_download(&mut self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = save_document(&self.download_dir, filename, bytes)?;
        self.last_download = Some(path.clone());
        Ok(path)
    }

    fn open_link(&mut self, link: DownloadLink) {
        self.last_link = Some(link.url.clone());
        self.pending_links.push(link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldGroup, HAS_AI_FIELD};
    use pretty_assertions::assert_eq;

    fn state() -> AppState {
        AppState::new("http://localhost:5000", PathBuf::from("/tmp"))
    }

    #[test]
    fn test_triggers_start_ready_with_idle_labels() {
        let state = state();
        for trigger in Trigger::ALL {
            assert!(state.is_trigger_ready(trigger));
            assert_eq!(state.trigger_label(trigger), trigger.idle_label());
        }
    }

    #[test]
    fn test_busy_trigger_shows_loading_label() {
        let mut state = state();
        state.set_trigger(Trigger::Generate, TriggerState::Busy);
        assert_eq!(state.trigger_label(Trigger::Generate), "Gerando...");
        assert!(state.is_trigger_ready(Trigger::Upload));
    }

    #[test]
    fn test_selected_files_split_and_trimmed() {
        let mut state = state();
        state
            .upload_paths
            .set_value(" /a/lotes.html ; /b/quadras.txt;\n/c/areas.htm ;; ");
        assert_eq!(
            state.selected_files(),
            vec![
                PathBuf::from("/a/lotes.html"),
                PathBuf::from("/b/quadras.txt"),
                PathBuf::from("/c/areas.htm"),
            ]
        );
    }

    #[test]
    fn test_no_files_selected() {
        assert!(state().selected_files().is_empty());
    }

    #[test]
    fn test_selected_image_uses_kind() {
        let mut state = state();
        assert!(state.selected_image().is_none());
        state.image_path.set_value("/img/logo.png");
        state.image_kind.set_value("logo_rodape");
        assert_eq!(
            state.selected_image(),
            Some((PathBuf::from("/img/logo.png"), ImageKind::FooterLogo))
        );
    }

    #[test]
    fn test_checkbox_and_usos_accessors() {
        let mut state = state();
        assert!(!state.is_checked(HAS_AI_FIELD));
        state.form.field_mut(HAS_AI_FIELD).unwrap().toggle();
        assert!(state.is_checked(HAS_AI_FIELD));
        assert_eq!(state.selected_usos(), Some(Vec::new()));
    }

    #[test]
    fn test_usos_absent_when_form_has_no_multiselect() {
        let mut state = state();
        state.form = MemorialForm::with_fields(vec![FormField::text(
            "nome_emp",
            "Nome",
            FieldGroup::General,
        )]);
        assert_eq!(state.selected_usos(), None);
    }

    #[test]
    fn test_focus_ring_follows_sections() {
        let mut state = state();
        assert!(!state.focus_ring().contains(&Focus::UploadPaths));
        assert!(!state.focus_ring().contains(&Focus::Button(Trigger::Excel)));

        state.set_section_visible(Section::Upload, true);
        state.set_section_visible(Section::ExcelTrigger, true);
        let ring = state.focus_ring();
        assert!(ring.contains(&Focus::UploadPaths));
        assert_eq!(ring.last(), Some(&Focus::Button(Trigger::Excel)));
    }

    #[test]
    fn test_focus_wraps_around() {
        let mut state = state();
        let len = state.focus_ring().len();
        state.focus_prev();
        assert_eq!(state.focus_index, len - 1);
        state.focus_next();
        assert_eq!(state.focus_index, 0);
    }

    #[test]
    fn test_refocus_keeps_item_when_ring_grows() {
        let mut state = state();
        state.focus_index = 3;
        let before = state.focus();
        state.set_section_visible(Section::Condominium, true);
        state.refocus(before);
        assert_eq!(state.focus(), before);
    }

    #[test]
    fn test_open_link_queues_and_remembers() {
        let mut state = state();
        state.open_link(DownloadLink {
            url: "http://localhost:5000/api/download/a.xlsx".into(),
            filename: Some("a.xlsx".into()),
            new_tab: false,
        });
        assert_eq!(state.pending_links.len(), 1);
        assert_eq!(
            state.last_link.as_deref(),
            Some("http://localhost:5000/api/download/a.xlsx")
        );
    }

    #[test]
    fn test_save_download_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::new("http://localhost:5000", dir.path().to_path_buf());
        let path = state.save_download("m.docx", b"doc").unwrap();
        assert_eq!(state.last_download, Some(path));
    }
}
