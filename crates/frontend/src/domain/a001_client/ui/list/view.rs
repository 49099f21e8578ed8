use contracts::domain::a001_client::{Client, ClientId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::state::{create_state, ClientListState, DELETE_ERROR};
use crate::domain::a001_client::api;
use crate::domain::a001_client::ui::details::ClientForm;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// What the form dialog is open for
#[derive(Clone, Debug, PartialEq)]
enum FormTarget {
    New,
    /// `from_manage` reopens the manage dialog after saving
    Edit { client: Client, from_manage: bool },
}

async fn reload(state: RwSignal<ClientListState>) {
    match api::get_clients().await {
        Ok(items) => {
            log::debug!("Loaded {} clients", items.len());
            state.update(|s| s.set_items(items));
        }
        Err(e) => {
            log::error!("Failed to load clients: {}", e);
            state.update(|s| s.load_failed());
        }
    }
}

fn parse_selection(value: &str) -> Option<ClientId> {
    value.trim().parse().ok()
}

/// Client picker with create / edit / delete dialogs
#[component]
pub fn ClientSelector(
    /// Selection changed (`None` is the placeholder)
    on_select: Callback<Option<ClientId>>,
    /// A client was deleted; fired only when it was the selected one
    on_deleted: Callback<ClientId>,
) -> impl IntoView {
    let state = create_state();
    let (form_target, set_form_target) = signal::<Option<FormTarget>>(None);
    let (manage_open, set_manage_open) = signal(false);
    let (pending_delete, set_pending_delete) = signal::<Option<ClientId>>(None);
    let (deleting, set_deleting) = signal(false);
    let (list_error, set_list_error) = signal::<Option<String>>(None);

    spawn_local(reload(state));

    let items = Memo::new(move |_| state.with(|s| s.items.clone()));
    let is_loaded = Memo::new(move |_| state.with(|s| s.is_loaded));
    let delete_candidate = Memo::new(move |_| {
        let id = pending_delete.get()?;
        state.with(|s| s.find(id).cloned())
    });
    let selected_value = Memo::new(move |_| {
        state.with(|s| s.selected.map(|id| id.to_string()).unwrap_or_default())
    });

    let change_selection = move |id: Option<ClientId>| {
        state.update(|s| s.select(id));
        on_select.run(id);
    };

    let on_saved = Callback::new(move |client: Client| {
        let target = form_target.get_untracked();
        set_form_target.set(None);
        match target {
            Some(FormTarget::Edit { from_manage, .. }) => {
                state.update(|s| s.replace(client));
                if from_manage {
                    set_manage_open.set(true);
                }
            }
            _ => spawn_local(async move {
                reload(state).await;
                change_selection(Some(client.id));
            }),
        }
    });

    let confirm_delete = move |_: leptos::ev::MouseEvent| {
        let Some(client_id) = pending_delete.get_untracked() else {
            return;
        };
        set_deleting.set(true);
        set_list_error.set(None);
        spawn_local(async move {
            let result = api::delete_client(client_id).await;
            set_deleting.set(false);
            set_pending_delete.set(None);
            match result {
                Ok(()) => {
                    let removal = state.try_update(|s| s.remove(client_id)).unwrap_or_default();
                    log::info!("Client {} deleted", client_id);
                    if removal.was_selected {
                        on_deleted.run(client_id);
                    }
                }
                Err(e) => {
                    log::error!("Failed to delete client {}: {}", client_id, e);
                    set_list_error.set(Some(DELETE_ERROR.to_string()));
                }
            }
        });
    };

    view! {
        <div class="card client-selector">
            <div class="client-selector__header">
                <label class="form__label" for="client-select">"Seleccionar Cliente"</label>
                <div class="client-selector__actions">
                    <Button
                        size=ButtonSize::Small
                        on_click=move |_| set_manage_open.set(true)
                        attr:title="Editar o eliminar clientes"
                    >
                        {icon("settings")}
                        " Gestionar"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_form_target.set(Some(FormTarget::New))
                    >
                        {icon("plus")}
                        " Nuevo"
                    </Button>
                </div>
            </div>

            <Show
                when=move || is_loaded.get()
                fallback=|| view! { <div class="client-selector__loading">"Cargando clientes..."</div> }
            >
                <select
                    id="client-select"
                    class="form__select"
                    prop:value=move || selected_value.get()
                    on:change=move |ev| change_selection(parse_selection(&event_target_value(&ev)))
                >
                    <option value="">"-- Elija un cliente --"</option>
                    {move || items.get().into_iter().map(|client| view! {
                        <option value=client.id.to_string()>{client.display_label()}</option>
                    }).collect_view()}
                </select>
            </Show>

            {move || list_error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}
        </div>

        <Show when=move || manage_open.get()>
            <Modal title="Gestionar Clientes".to_string() on_close=Callback::new(move |_| set_manage_open.set(false))>
                <div class="client-manage">
                    {move || {
                        let items = items.get();
                        if items.is_empty() {
                            return view! { <p class="client-manage__empty">"No hay clientes registrados."</p> }.into_any();
                        }
                        items.into_iter().map(|client| {
                            let for_edit = client.clone();
                            let client_id = client.id;
                            view! {
                                <div class="client-manage__row">
                                    <div>
                                        <div class="client-manage__name">{client.name.clone()}</div>
                                        <div class="client-manage__email">{client.contact_email.clone().unwrap_or_default()}</div>
                                    </div>
                                    <div class="client-manage__buttons">
                                        <Button
                                            size=ButtonSize::Small
                                            attr:title="Editar"
                                            on_click=move |_| {
                                                set_manage_open.set(false);
                                                set_form_target.set(Some(FormTarget::Edit {
                                                    client: for_edit.clone(),
                                                    from_manage: true,
                                                }));
                                            }
                                        >
                                            {icon("edit")}
                                        </Button>
                                        <Button
                                            size=ButtonSize::Small
                                            class="button--danger"
                                            attr:title="Eliminar"
                                            on_click=move |_| set_pending_delete.set(Some(client_id))
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </div>
                                </div>
                            }
                        }).collect_view().into_any()
                    }}
                </div>
            </Modal>
        </Show>

        {move || form_target.get().map(|target| {
            let client = match target {
                FormTarget::New => None,
                FormTarget::Edit { client, .. } => Some(client),
            };
            view! {
                <ClientForm
                    client=client
                    on_saved=on_saved
                    on_close=Callback::new(move |_| set_form_target.set(None))
                />
            }
        })}

        {move || delete_candidate.get().map(|client| view! {
            <Modal
                title="¿Eliminar Cliente?".to_string()
                on_close=Callback::new(move |_| set_pending_delete.set(None))
                class="modal--narrow"
            >
                <div class="confirm-dialog">
                    <div class="confirm-dialog__icon">{icon("alert-triangle")}</div>
                    <p>
                        "Esta acción no se puede deshacer. Se eliminará "
                        <strong>{client.name.clone()}</strong>
                        " y todos sus datos asociados."
                    </p>
                    <div class="modal-actions">
                        <Button on_click=move |_| set_pending_delete.set(None)>"Cancelar"</Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            class="button--danger"
                            disabled=Signal::derive(move || deleting.get())
                            on_click=confirm_delete
                        >
                            {move || if deleting.get() { "Eliminando..." } else { "Sí, Eliminar" }}
                        </Button>
                    </div>
                </div>
            </Modal>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection(""), None);
        assert_eq!(parse_selection("7"), Some(7));
        assert_eq!(parse_selection(" 12 "), Some(12));
        assert_eq!(parse_selection("abc"), None);
    }
}
