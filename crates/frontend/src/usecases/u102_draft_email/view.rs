use contracts::domain::a001_client::ClientId;
use contracts::usecases::u102_draft_email::{EmailDraftRequest, EmailDraftResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

pub const DRAFT_ERROR: &str = "Error generando el borrador. Intente nuevamente.";
const COPIED_FEEDBACK_MS: u32 = 2000;

/// Email draft for a recommended action. The draft is requested as soon as the
/// dialog opens; every open starts from a clean state since the caller unmounts it on close.
#[component]
pub fn EmailDraftModal(
    client_id: ClientId,
    recommendation: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let subject = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (copied, set_copied) = signal(false);
    let request = StoredValue::new(EmailDraftRequest {
        user_id: client_id,
        recommendation,
    });

    let generate = move || {
        if is_loading.get_untracked() {
            return;
        }
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let request = request.get_value();
            match api::draft_email(&request).await {
                Ok(EmailDraftResponse { subject: s, body: b }) => {
                    subject.set(s);
                    body.set(b);
                }
                Err(e) => {
                    log::error!("Email draft failed for client {}: {}", client_id, e);
                    set_error.set(Some(DRAFT_ERROR.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };
    generate();

    let copy = move |_: leptos::ev::MouseEvent| {
        let draft = EmailDraftResponse {
            subject: subject.get_untracked(),
            body: body.get_untracked(),
        };
        copy_to_clipboard_with_callback(&draft.clipboard_text(), move || {
            set_copied.set(true);
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(COPIED_FEEDBACK_MS).await;
                let _ = set_copied.try_set(false);
            });
        });
    };

    view! {
        <Modal title="Borrador de Correo".to_string() on_close=on_close class="modal--wide">
            {move || {
                if is_loading.get() {
                    return view! {
                        <div class="email-draft__loading">
                            <Spinner size=SpinnerSize::Small />
                            <p>"Redactando correo personalizado..."</p>
                        </div>
                    }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! {
                        <div class="email-draft__error">
                            <p class="text-error">{message}</p>
                            <Button on_click=move |_| generate()>"Reintentar"</Button>
                        </div>
                    }.into_any();
                }
                view! {
                    <div class="email-draft">
                        <div class="form__group">
                            <label class="form__label" for="email-subject">"Asunto"</label>
                            <input
                                id="email-subject"
                                class="form__input"
                                type="text"
                                prop:value=move || subject.get()
                                on:input=move |ev| subject.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label" for="email-body">"Cuerpo del Mensaje"</label>
                            <textarea
                                id="email-body"
                                class="form__textarea email-draft__body"
                                rows="12"
                                prop:value=move || body.get()
                                on:input=move |ev| body.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                }.into_any()
            }}

            <div class="modal-actions">
                <Button on_click=move |_| on_close.run(())>"Cerrar"</Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=copy
                    disabled=Signal::derive(move || is_loading.get() || error.get().is_some())
                >
                    {move || if copied.get() {
                        view! { {icon("check")}" ¡Copiado!" }.into_any()
                    } else {
                        view! { {icon("copy")}" Copiar Texto" }.into_any()
                    }}
                </Button>
            </div>
        </Modal>
    }
}
