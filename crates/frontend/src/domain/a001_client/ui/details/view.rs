use contracts::domain::a001_client::Client;
use leptos::prelude::*;
use thaw::*;

use super::view_model::ClientFormViewModel;
use crate::shared::modal::Modal;

/// Create / edit dialog. `client` is `None` for a new client.
#[component]
pub fn ClientForm(
    client: Option<Client>,
    on_saved: Callback<Client>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = ClientFormViewModel::new();
    vm.load_or_reset(client.as_ref());

    view! {
        <Modal title=Signal::derive(move || vm.title().to_string()) on_close=on_close class="modal--narrow">
            <form
                class="detail-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.save_command(on_saved);
                }
            >
                {move || vm.error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

                <div class="form__group">
                    <label class="form__label" for="client-name">"Nombre de la Empresa"</label>
                    <input
                        class="form__input"
                        type="text"
                        id="client-name"
                        required=true
                        placeholder="Ej. Tech Corp"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="client-email">"Email de Contacto"</label>
                    <input
                        class="form__input"
                        type="email"
                        id="client-email"
                        placeholder="contacto@empresa.com"
                        prop:value=move || vm.form.with(|f| f.contact_email.clone())
                        on:input=move |ev| vm.form.update(|f| f.contact_email = event_target_value(&ev))
                    />
                </div>

                <div class="modal-actions">
                    <Button on_click=move |_| on_close.run(())>"Cancelar"</Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_saved)
                        disabled=Signal::derive(move || vm.is_saving.get() || !vm.is_form_valid())
                    >
                        {move || vm.submit_label()}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
