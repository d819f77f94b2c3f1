//! Spreadsheet generation

use super::{server_error, FormController, ViewBinding};
use crate::api::MemorialApi;
use crate::state::{
    DownloadLink, NotificationKind, Payload, Trigger, TriggerState, HAS_AI_FIELD,
    HAS_RESTRICAO_FIELD,
};

pub(crate) const SPREADSHEET_GENERATED: &str = "Planilha gerada com sucesso!";

/// Payload for `/api/generate-excel`: scalars only, the last repeated value wins
pub fn spreadsheet_payload<V: ViewBinding + ?Sized>(view: &V) -> Payload {
    Payload::from_entries_last_wins(view.form_entries()).with_overrides(
        view.is_checked(HAS_AI_FIELD),
        view.is_checked(HAS_RESTRICAO_FIELD),
        view.selected_usos(),
    )
}

impl<A: MemorialApi> FormController<A> {
    /// Request a spreadsheet and follow its download link
    pub async fn generate_excel<V: ViewBinding>(&self, view: &mut V) {
        let payload = spreadsheet_payload(view);

        view.set_trigger(Trigger::Excel, TriggerState::Busy);
        view.repaint();

        match self.api.generate_excel(&payload).await {
            Ok(response) if response.success => {
                view.notify(NotificationKind::Success, SPREADSHEET_GENERATED);
                if let Some(url) = response.download_url.as_deref() {
                    view.open_link(DownloadLink {
                        url: self.api.resolve_url(url),
                        filename: response.filename.clone(),
                        new_tab: false,
                    });
                }
            }
            Ok(response) => {
                view.notify(
                    NotificationKind::Error,
                    &format!(
                        "Erro ao gerar planilha: {}",
                        server_error(response.error.as_deref())
                    ),
                );
                if let Some(traceback) = &response.traceback {
                    tracing::error!("Server traceback:\n{traceback}");
                }
            }
            Err(e) => {
                tracing::error!("Spreadsheet generation failed: {e}");
                view.notify(
                    NotificationKind::Error,
                    &format!("Erro ao gerar planilha: {e}"),
                );
            }
        }

        view.set_trigger(Trigger::Excel, TriggerState::Ready);
    }
}
