use contracts::domain::a001_client::ClientId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api::{self, REPORT_FILE_NAME};
use crate::shared::api_utils::api_url;
use crate::shared::export::{download_bytes, open_in_new_tab, PDF_MIME};
use crate::shared::icons::icon;

async fn export_report(client_id: ClientId) {
    let saved = match api::download_report(client_id).await {
        Ok(bytes) => download_bytes(&bytes, PDF_MIME, REPORT_FILE_NAME),
        Err(e) => Err(e.to_string()),
    };
    if let Err(e) = saved {
        log::error!("Report download failed, opening the endpoint instead: {}", e);
        if let Err(e) = open_in_new_tab(&api_url(&api::report_path(client_id))) {
            log::error!("Fallback failed: {}", e);
        }
    }
}

/// Executive PDF report of the active client
#[component]
pub fn ExportButton(
    #[prop(into)] client_id: Signal<Option<ClientId>>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let (downloading, set_downloading) = signal(false);

    let on_click = move |_: leptos::ev::MouseEvent| {
        if disabled.get_untracked() || downloading.get_untracked() {
            return;
        }
        let Some(id) = client_id.get_untracked() else {
            return;
        };
        set_downloading.set(true);
        spawn_local(async move {
            export_report(id).await;
            set_downloading.set(false);
        });
    };

    view! {
        <Button
            class="export-button"
            on_click=on_click
            disabled=Signal::derive(move || disabled.get() || downloading.get() || client_id.get().is_none())
            attr:title="Descargar Informe Ejecutivo PDF"
        >
            {move || if downloading.get() {
                view! { <Spinner size=SpinnerSize::Tiny />" Descargando..." }.into_any()
            } else {
                view! { {icon("file-text")}" Reporte PDF" }.into_any()
            }}
        </Button>
    }
}
