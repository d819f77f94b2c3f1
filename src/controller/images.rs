//! Watermark and logo upload

use super::{server_error, FormController, ViewBinding};
use crate::api::MemorialApi;
use crate::state::{NotificationKind, Trigger, TriggerState};
use std::path::Path;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

pub(crate) const NO_IMAGE_SELECTED: &str = "Por favor, selecione uma imagem";
pub(crate) const UNSUPPORTED_IMAGE: &str =
    "Tipo de arquivo não permitido. Use PNG, JPG, JPEG, GIF ou BMP";

/// Whether the server accepts this file as an image
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

impl<A: MemorialApi> FormController<A> {
    /// Upload the selected image into its document slot
    pub async fn upload_image<V: ViewBinding>(&self, view: &mut V) {
        let Some((path, kind)) = view.selected_image() else {
            view.notify(NotificationKind::Error, NO_IMAGE_SELECTED);
            return;
        };
        if !is_supported_image(&path) {
            view.notify(NotificationKind::Error, UNSUPPORTED_IMAGE);
            return;
        }

        view.set_trigger(Trigger::UploadImage, TriggerState::Busy);
        view.repaint();

        match self.api.upload_image(&path, kind).await {
            Ok(response) if response.success => {
                let message = response
                    .message
                    .unwrap_or_else(|| format!("Imagem {} salva com sucesso!", kind.as_str()));
                view.notify(NotificationKind::Success, &message);
            }
            Ok(response) => {
                view.notify(
                    NotificationKind::Error,
                    &format!(
                        "Erro ao enviar imagem: {}",
                        server_error(response.error.as_deref())
                    ),
                );
            }
            Err(e) => {
                tracing::error!("Image upload failed: {e}");
                view.notify(
                    NotificationKind::Error,
                    &format!("Erro ao enviar imagem: {e}"),
                );
            }
        }

        view.set_trigger(Trigger::UploadImage, TriggerState::Ready);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ImageKind, ImageUploadResponse, MockMemorialApi};
    use crate::controller::test_support::{assert_all_ready, errors, state_in, successes};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_image(Path::new("logo.PNG")));
        assert!(is_supported_image(Path::new("/x/marca.jpeg")));
        assert!(!is_supported_image(Path::new("logo.svg")));
        assert!(!is_supported_image(Path::new("logo")));
    }

    #[tokio::test]
    async fn test_no_image_selected() {
        let mut api = MockMemorialApi::new();
        api.expect_upload_image().times(0);
        let controller = FormController::new(api);
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        controller.upload_image(&mut state).await;

        assert_eq!(errors(&state)[0].message, NO_IMAGE_SELECTED);
    }

    #[tokio::test]
    async fn test_unsupported_extension_rejected_locally() {
        let mut api = MockMemorialApi::new();
        api.expect_upload_image().times(0);
        let controller = FormController::new(api);
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.image_path.set_value("/img/logo.svg");

        controller.upload_image(&mut state).await;

        assert_eq!(errors(&state)[0].message, UNSUPPORTED_IMAGE);
        assert_all_ready(&state);
    }

    #[tokio::test]
    async fn test_success_shows_server_message() {
        let mut api = MockMemorialApi::new();
        api.expect_upload_image()
            .withf(|path, kind| path == Path::new("/img/logo.png") && *kind == ImageKind::HeaderLogo)
            .times(1)
            .returning(|_, _| {
                Ok(ImageUploadResponse {
                    success: true,
                    filename: Some("logo_cabecalho.png".into()),
                    path: Some("static/images/logo_cabecalho.png".into()),
                    message: Some("Imagem logo_cabecalho salva com sucesso!".into()),
                    error: None,
                })
            });
        let controller = FormController::new(api);
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.image_path.set_value("/img/logo.png");
        state.image_kind.set_value("logo_cabecalho");

        controller.upload_image(&mut state).await;

        assert_eq!(
            successes(&state)[0].message,
            "Imagem logo_cabecalho salva com sucesso!"
        );
        assert_all_ready(&state);
    }

    #[tokio::test]
    async fn test_server_rejection_reports_error() {
        let mut api = MockMemorialApi::new();
        api.expect_upload_image().returning(|_, _| {
            Ok(ImageUploadResponse {
                error: Some("Tipo de imagem inválido".into()),
                ..Default::default()
            })
        });
        let controller = FormController::new(api);
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.image_path.set_value("/img/marca.bmp");

        controller.upload_image(&mut state).await;

        let errors = errors(&state);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Erro ao enviar imagem: Tipo de imagem inválido");
        assert!(successes(&state).is_empty());
        assert_all_ready(&state);
    }
}
