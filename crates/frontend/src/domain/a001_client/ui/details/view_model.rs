use contracts::domain::a001_client::{Client, ClientDto, ClientId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_client::api;
use crate::domain::a001_client::ui::list::state::SAVE_ERROR;

/// ViewModel of the create / edit client form
///
/// - `form` holds the DTO being edited, the view writes it directly
/// - `editing` is `Some(id)` in edit mode
/// - `save_command` validates, sends and hands the saved client to the caller
#[derive(Clone, Copy)]
pub struct ClientFormViewModel {
    pub form: RwSignal<ClientDto>,
    pub editing: RwSignal<Option<ClientId>>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl ClientFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ClientDto::default()),
            editing: RwSignal::new(None),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn reset_form(&self) {
        self.form.set(ClientDto::default());
        self.editing.set(None);
        self.error.set(None);
        self.is_saving.set(false);
    }

    /// Fill the form from an existing client, or clear it for a new one
    pub fn load_or_reset(&self, client: Option<&Client>) {
        self.reset_form();
        if let Some(client) = client {
            self.form.set(ClientDto::from_client(client));
            self.editing.set(Some(client.id));
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.get().is_some()
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.validate().is_ok())
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit_mode() {
            "Editar Cliente"
        } else {
            "Registrar Nuevo Cliente"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_saving.get() {
            "Guardando..."
        } else if self.is_edit_mode() {
            "Actualizar"
        } else {
            "Crear Cliente"
        }
    }

    /// Create or update depending on the mode; `on_saved` gets the backend's client
    pub fn save_command(&self, on_saved: Callback<Client>) {
        if self.is_saving.get_untracked() {
            return;
        }
        let dto = self.form.get_untracked().normalized();
        if let Err(message) = dto.validate() {
            self.error.set(Some(message));
            return;
        }

        let editing = self.editing.get_untracked();
        let error = self.error;
        let is_saving = self.is_saving;
        is_saving.set(true);
        error.set(None);

        spawn_local(async move {
            let result = match editing {
                Some(id) => api::update_client(id, &dto).await,
                None => api::create_client(&dto).await,
            };
            is_saving.set(false);
            match result {
                Ok(client) => {
                    log::info!("Client {} saved", client.id);
                    on_saved.run(client);
                }
                Err(e) => {
                    log::error!("Failed to save client: {}", e);
                    error.set(Some(SAVE_ERROR.to_string()));
                }
            }
        });
    }
}

impl Default for ClientFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
