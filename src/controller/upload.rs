//! Supporting file upload

use super::{server_error, FormController, ViewBinding};
use crate::api::MemorialApi;
use crate::state::{NotificationKind, Trigger, TriggerState, UploadStatus};

pub(crate) const NO_FILES_SELECTED: &str = "Por favor, selecione pelo menos um arquivo";

impl<A: MemorialApi> FormController<A> {
    /// Upload the selected files and report the result
    pub async fn upload_files<V: ViewBinding>(&self, view: &mut V) {
        let files = view.selected_files();
        if files.is_empty() {
            view.notify(NotificationKind::Error, NO_FILES_SELECTED);
            return;
        }

        view.set_trigger(Trigger::Upload, TriggerState::Busy);
        view.repaint();

        match self.api.upload_files(&files).await {
            Ok(response) if response.success => {
                let count = response.count;
                view.set_upload_status(UploadStatus {
                    count,
                    files: response.files,
                });
                view.notify(
                    NotificationKind::Success,
                    &format!("{count} arquivo(s) anexado(s) com sucesso!"),
                );
            }
            Ok(response) => {
                view.notify(
                    NotificationKind::Error,
                    &format!(
                        "Erro ao fazer upload: {}",
                        server_error(response.error.as_deref())
                    ),
                );
            }
            Err(e) => {
                tracing::error!("Upload failed: {e}");
                view.notify(
                    NotificationKind::Error,
                    &format!("Erro ao fazer upload: {e}"),
                );
            }
        }

        view.set_trigger(Trigger::Upload, TriggerState::Ready);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockMemorialApi, UploadResponse};
    use crate::controller::test_support::{assert_all_ready, errors, state_in, successes};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_no_files_notifies_without_request() {
        let mut api = MockMemorialApi::new();
        api.expect_upload_files().times(0);
        let controller = FormController::new(api);
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        controller.upload_files(&mut state).await;

        let errors = errors(&state);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, NO_FILES_SELECTED);
        assert_all_ready(&state);
    }

    #[tokio::test]
    async fn test_success_fills_status_panel() {
        let mut api = MockMemorialApi::new();
        api.expect_upload_files()
            .withf(|paths| {
                paths.len() == 2
                    && paths[0] == PathBuf::from("/data/lotes.html")
                    && paths[1] == PathBuf::from("/data/quadras.txt")
            })
            .times(1)
            .returning(|_| {
                Ok(UploadResponse {
                    success: true,
                    count: 2,
                    files: vec!["lotes.html".into(), "quadras.txt".into()],
                    error: None,
                })
            });
        let controller = FormController::new(api);
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state
            .upload_paths
            .set_value("/data/lotes.html; /data/quadras.txt");

        controller.upload_files(&mut state).await;

        assert_eq!(
            state.upload_status,
            Some(UploadStatus {
                count: 2,
                files: vec!["lotes.html".into(), "quadras.txt".into()],
            })
        );
        let successes = successes(&state);
        assert_eq!(successes.len(), 1);
        assert!(successes[0].message.starts_with("2 arquivo(s)"));
        assert_all_ready(&state);
    }

    #[tokio::test]
    async fn test_server_failure_uses_server_message() {
        let mut api = MockMemorialApi::new();
        api.expect_upload_files().returning(|_| {
            Ok(UploadResponse {
                error: Some("Nenhum arquivo enviado".into()),
                ..Default::default()
            })
        });
        let controller = FormController::new(api);
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.upload_paths.set_value("/data/a.html");

        controller.upload_files(&mut state).await;

        let errors = errors(&state);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Erro ao fazer upload: Nenhum arquivo enviado");
        assert!(state.upload_status.is_none());
        assert_all_ready(&state);
    }

    #[tokio::test]
    async fn test_server_failure_without_message_uses_fallback() {
        let mut api = MockMemorialApi::new();
        api.expect_upload_files()
            .returning(|_| Ok(UploadResponse::default()));
        let controller = FormController::new(api);
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.upload_paths.set_value("/data/a.html");

        controller.upload_files(&mut state).await;

        assert_eq!(
            errors(&state)[0].message,
            "Erro ao fazer upload: Erro desconhecido"
        );
    }

    #[tokio::test]
    async fn test_transport_failure_restores_button() {
        let mut api = MockMemorialApi::new();
        api.expect_upload_files().returning(|_| {
            Err(ApiError::Io {
                path: "/data/a.html".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            })
        });
        let controller = FormController::new(api);
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.upload_paths.set_value("/data/a.html");

        controller.upload_files(&mut state).await;

        let errors = errors(&state);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("/data/a.html"));
        assert_all_ready(&state);
    }
}
