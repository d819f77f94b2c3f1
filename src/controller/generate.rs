//! DOCX generation and download

use super::{server_error, FormController, ViewBinding};
use crate::api::{GenerateResponse, MemorialApi};
use crate::state::{
    DownloadLink, NotificationKind, Payload, Trigger, TriggerState, HAS_AI_FIELD,
    HAS_RESTRICAO_FIELD,
};
use anyhow::Result;
use std::path::PathBuf;

pub(crate) const DOCUMENT_GENERATED: &str = "Documento gerado com sucesso!";

/// Payload for `/api/generate`: repeated names become lists
pub fn document_payload<V: ViewBinding + ?Sized>(view: &V) -> Payload {
    Payload::from_entries_promoting(view.form_entries()).with_overrides(
        view.is_checked(HAS_AI_FIELD),
        view.is_checked(HAS_RESTRICAO_FIELD),
        view.selected_usos(),
    )
}

/// Last path segment of a download URL, used when the server names nothing
fn filename_from_url(url: &str) -> String {
    url.rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("documento")
        .to_string()
}

impl<A: MemorialApi> FormController<A> {
    /// Submit the form for DOCX generation and download the result
    pub async fn generate_document<V: ViewBinding>(&self, view: &mut V) {
        let payload = document_payload(view);

        view.set_trigger(Trigger::Generate, TriggerState::Busy);
        view.repaint();

        match self.api.generate_document(&payload).await {
            Ok(response) if response.success => {
                view.notify(NotificationKind::Success, DOCUMENT_GENERATED);
                self.deliver_document(view, &response).await;
            }
            Ok(response) => {
                view.notify(
                    NotificationKind::Error,
                    &format!(
                        "Erro ao gerar documento: {}",
                        server_error(response.error.as_deref())
                    ),
                );
                if let Some(traceback) = &response.traceback {
                    tracing::error!("Server traceback:\n{traceback}");
                }
            }
            Err(e) => {
                tracing::error!("Document generation failed: {e}");
                view.notify(
                    NotificationKind::Error,
                    &format!("Erro ao gerar documento: {e}"),
                );
            }
        }

        view.set_trigger(Trigger::Generate, TriggerState::Ready);
    }

    /// Save the generated file locally, or hand its link to the browser
    async fn deliver_document<V: ViewBinding>(&self, view: &mut V, response: &GenerateResponse) {
        let Some(url) = response.download_url.as_deref() else {
            tracing::warn!("Generation succeeded without a download_url");
            return;
        };
        let filename = response
            .filename
            .clone()
            .unwrap_or_else(|| filename_from_url(url));
        if let Some(size) = response.file_size {
            tracing::info!(%filename, size, "document generated");
        }

        match self.fetch_and_save(view, url, &filename).await {
            Ok(path) => tracing::info!("Saved {}", path.display()),
            Err(e) => {
                tracing::warn!("Download of {url} failed, opening link instead: {e:#}");
                view.open_link(DownloadLink {
                    url: self.api.resolve_url(url),
                    filename: Some(filename),
                    new_tab: true,
                });
            }
        }
    }

    async fn fetch_and_save<V: ViewBinding>(
        &self,
        view: &mut V,
        url: &str,
        filename: &str,
    ) -> Result<PathBuf> {
        let bytes = self.api.fetch_document(url).await?;
        view.save_download(filename, &bytes)
    }
}
