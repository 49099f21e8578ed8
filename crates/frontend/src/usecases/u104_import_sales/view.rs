use contracts::usecases::u104_import_sales::{
    is_csv_file_name, template_csv, ImportResponse, TEMPLATE_FILE_NAME,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::File;

use super::api;
use crate::shared::api_utils::ApiError;
use crate::shared::export::{download_text, CSV_MIME};
use crate::shared::icons::icon;

pub const IMPORT_ERROR: &str = "Error al importar el archivo. Verifica el formato e inténtalo de nuevo.";
const NOT_CSV_ERROR: &str = "Solo se admiten archivos .csv";

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ImportStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl ImportStatus {
    pub fn from_result(result: &Result<ImportResponse, ApiError>) -> Self {
        match result {
            Ok(response) => ImportStatus::Success(format!(
                "¡Éxito! Se han importado {} órdenes.",
                response.orders_imported
            )),
            Err(_) => ImportStatus::Error(IMPORT_ERROR.to_string()),
        }
    }
}

/// CSV upload of historical sales, with a template download
#[component]
pub fn SalesImporter() -> impl IntoView {
    let file = StoredValue::new_local(None::<File>);
    let (file_name, set_file_name) = signal::<Option<String>>(None);
    let (status, set_status) = signal(ImportStatus::Idle);
    let (uploading, set_uploading) = signal(false);
    let (drag_over, set_drag_over) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let choose = move |picked: Option<File>| {
        let Some(picked) = picked else {
            return;
        };
        set_status.set(ImportStatus::Idle);
        if !is_csv_file_name(&picked.name()) {
            set_status.set(ImportStatus::Error(NOT_CSV_ERROR.to_string()));
            return;
        }
        set_file_name.set(Some(picked.name()));
        file.set_value(Some(picked));
    };

    let clear_file = move || {
        file.set_value(None);
        set_file_name.set(None);
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    };

    let upload = move |_: leptos::ev::MouseEvent| {
        let Some(picked) = file.get_value() else {
            return;
        };
        set_uploading.set(true);
        set_status.set(ImportStatus::Idle);
        spawn_local(async move {
            let result = api::import_sales(&picked).await;
            match &result {
                Ok(response) => log::info!("Imported {} orders from {}", response.orders_imported, picked.name()),
                Err(e) => log::error!("Upload error: {}", e),
            }
            if result.is_ok() {
                clear_file();
            }
            set_status.set(ImportStatus::from_result(&result));
            set_uploading.set(false);
        });
    };

    let download_template = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = download_text(&template_csv(), CSV_MIME, TEMPLATE_FILE_NAME) {
            log::error!("Template download failed: {}", e);
        }
    };

    view! {
        <div class="card importer">
            <h3 class="card__title">{icon("upload")}" Importar Ventas Históricas"</h3>

            <div
                class=move || if drag_over.get() { "importer__drop importer__drop--active" } else { "importer__drop" }
                on:click=move |_| {
                    if let Some(input) = input_ref.get_untracked() {
                        input.click();
                    }
                }
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    set_drag_over.set(true);
                }
                on:dragleave=move |_| set_drag_over.set(false)
                on:drop=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    set_drag_over.set(false);
                    choose(ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)));
                }
            >
                <input
                    node_ref=input_ref
                    type="file"
                    accept=".csv"
                    class="importer__input"
                    on:change=move |ev| {
                        let picked = event_target::<web_sys::HtmlInputElement>(&ev)
                            .files()
                            .and_then(|files| files.get(0));
                        choose(picked);
                    }
                />
                {move || match file_name.get() {
                    Some(name) => view! {
                        <div class="importer__file">
                            {icon("file-text")}
                            <span class="importer__file-name">{name}</span>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="importer__hint">
                            {icon("upload")}
                            <p>"Arrastra tu archivo CSV aquí o haz clic para seleccionar"</p>
                        </div>
                    }.into_any(),
                }}
            </div>

            <div class="importer__actions">
                <Button size=ButtonSize::Small on_click=download_template>
                    {icon("download")}
                    " Descargar Plantilla CSV"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=upload
                    disabled=Signal::derive(move || file_name.get().is_none() || uploading.get())
                >
                    {move || if uploading.get() { "Procesando..." } else { "Cargar Datos" }}
                </Button>
            </div>

            {move || match status.get() {
                ImportStatus::Idle => None,
                ImportStatus::Success(message) => Some(view! {
                    <div class="info-box text-success">{icon("check-circle")}" "{message}</div>
                }.into_any()),
                ImportStatus::Error(message) => Some(view! {
                    <div class="warning-box text-error">{icon("alert-triangle")}" "{message}</div>
                }.into_any()),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_result() {
        let ok = Ok(ImportResponse {
            orders_imported: 42,
            message: None,
        });
        assert_eq!(
            ImportStatus::from_result(&ok),
            ImportStatus::Success("¡Éxito! Se han importado 42 órdenes.".to_string())
        );
        let failed = Err(ApiError::Status {
            status: 400,
            message: None,
        });
        assert_eq!(ImportStatus::from_result(&failed), ImportStatus::Error(IMPORT_ERROR.to_string()));
    }
}
