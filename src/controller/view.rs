//! The screen as seen by the controller

use crate::api::ImageKind;
use crate::state::{DownloadLink, NotificationKind, Section, Trigger, TriggerState, UploadStatus};
use anyhow::Result;
use std::path::PathBuf;

/// Typed access to every control the controller reads or changes
pub trait ViewBinding {
    /// Raw value of the document type selector
    fn document_type(&self) -> String;

    /// Raw value of the non-buildable area yes/no selector
    fn ane_choice(&self) -> String;

    fn set_section_visible(&mut self, section: Section, visible: bool);

    fn set_ane_width_visible(&mut self, visible: bool);

    /// Files picked for upload, possibly none
    fn selected_files(&self) -> Vec<PathBuf>;

    /// Image picked for upload and the slot it fills
    fn selected_image(&self) -> Option<(PathBuf, ImageKind)>;

    fn set_trigger(&mut self, trigger: Trigger, state: TriggerState);

    fn set_upload_status(&mut self, status: UploadStatus);

    /// Form data as `(name, value)` pairs in document order
    fn form_entries(&self) -> Vec<(String, String)>;

    fn is_checked(&self, name: &str) -> bool;

    /// Selected land uses; `None` when the form has no such control
    fn selected_usos(&self) -> Option<Vec<String>>;

    fn notify(&mut self, kind: NotificationKind, message: &str);

    /// Save a downloaded document under `filename`
    fn save_download(&mut self, filename: &str, bytes: &[u8]) -> Result<PathBuf>;

    /// Hand a link to the user's browser
    fn open_link(&mut self, link: DownloadLink);

    /// Make pending changes visible before a long wait
    fn repaint(&mut self) {}
}
