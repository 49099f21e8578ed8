use contracts::domain::a001_client::ClientId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::state::{create_state, ChatLog, Sender};
use crate::shared::icons::icon;

fn send(chat: RwSignal<ChatLog>, text: &str, order_ids: Vec<i64>) -> bool {
    let Some(pending) = chat.try_update(|l| l.begin_send(text, order_ids)).flatten() else {
        return false;
    };
    spawn_local(async move {
        let result = api::send_message(&pending.request).await;
        if let Err(e) = &result {
            log::error!("Chat error: {}", e);
        }
        if !chat.try_update(|l| l.finish_reply(&pending, result)).unwrap_or(false) {
            log::debug!("Dropped chat reply for a previous client");
        }
    });
    true
}

/// Floating assistant that answers questions about the loaded orders
#[component]
pub fn ChatWidget(
    /// Client whose orders are discussed; a change starts a new conversation
    #[prop(into)]
    scope: Signal<Option<ClientId>>,
    #[prop(into)] order_ids: Signal<Vec<i64>>,
    /// Orders are being reloaded
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let chat = create_state();
    let (is_open, set_is_open) = signal(false);
    let input = RwSignal::new(String::new());

    Effect::new(move |_| {
        let scope = scope.get();
        chat.update(|l| {
            l.rescope(scope);
        });
    });

    let pending = Memo::new(move |_| chat.with(|l| l.pending));
    let messages = Memo::new(move |_| chat.with(|l| l.messages.clone()));
    let is_empty = Memo::new(move |_| chat.with(|l| l.messages.is_empty()));
    let can_send = move || !pending.get() && !disabled.get() && !input.with(|t| t.trim().is_empty());

    let submit = move || {
        if disabled.get_untracked() {
            return;
        }
        let text = input.get_untracked();
        if send(chat, &text, order_ids.get_untracked()) {
            input.set(String::new());
        }
    };

    view! {
        <div class="chat-widget">
            <Show when=move || is_open.get()>
                <div class="chat-widget__window">
                    <div class="chat-widget__header">
                        <div class="chat-widget__title">
                            {icon("bot")}
                            <h3>"Asistente B2B"</h3>
                        </div>
                        <button class="chat-widget__close" on:click=move |_| set_is_open.set(false)>
                            {icon("x")}
                        </button>
                    </div>

                    <div class="chat-widget__messages">
                        {move || {
                            if is_empty.get() {
                                return view! {
                                    <div class="chat-widget__empty">
                                        <p>"Hola, soy tu asistente IA."</p>
                                        <p>"Pregúntame sobre estas órdenes."</p>
                                    </div>
                                }.into_any();
                            }
                            view! {
                                <For
                                    each=move || messages.get()
                                    key=|message| message.id
                                    children=|message| {
                                        let modifier = match message.sender {
                                            Sender::User => "chat-message--user",
                                            Sender::Ai => "chat-message--ai",
                                        };
                                        view! {
                                            <div class=format!("chat-message {}", modifier)>
                                                <div class="chat-message__bubble">{message.text}</div>
                                            </div>
                                        }
                                    }
                                />
                            }.into_any()
                        }}
                        <Show when=move || pending.get()>
                            <div class="chat-message chat-message--ai">
                                <div class="chat-message__bubble chat-message__bubble--typing">"Escribiendo..."</div>
                            </div>
                        </Show>
                    </div>

                    <div class="chat-widget__input">
                        <input
                            type="text"
                            class="form__input"
                            placeholder="Escribe tu consulta..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    submit();
                                }
                            }
                        />
                        <button
                            class="chat-widget__send"
                            disabled=move || !can_send()
                            on:click=move |_| submit()
                        >
                            {icon("send")}
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || !is_open.get()>
                <button class="chat-widget__toggle" on:click=move |_| set_is_open.set(true) title="Abrir asistente">
                    {icon("message-circle")}
                </button>
            </Show>
        </div>
    }
}
