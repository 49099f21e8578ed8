//! Dashboard top bar.
//!
//! Contains:
//! - Title
//! - Greeting with the user's first role
//! - PDF export of the active client
//! - Theme toggle and logout

use contracts::domain::a001_client::ClientId;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::context::{logout, use_auth};
use crate::usecases::u105_export_report::ExportButton;

#[component]
pub fn Header(
    /// Export is offered only when a client is selected
    #[prop(into)]
    active_client: Signal<Option<ClientId>>,
    /// Client data is loading
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_| {
        logout(set_auth_state);
        log::info!("Signed out");
        navigate("/login", Default::default());
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <div class="top-header__logo">{icon("activity")}</div>
                <div>
                    <h1 class="top-header__title">"Dashboard de Inteligencia B2B"</h1>
                    <p class="top-header__subtitle">"Análisis predictivo estratégico"</p>
                </div>
            </div>

            <div class="top-header__actions">
                {move || auth_state.get().user_info.map(|user| view! {
                    <div class="top-header__user">
                        <span class="top-header__greeting">{format!("Hola, {}", user.display_name())}</span>
                        <span class="top-header__role">{user.primary_role().to_string()}</span>
                    </div>
                })}

                <Show when=move || active_client.get().is_some()>
                    <ExportButton client_id=active_client disabled=busy />
                </Show>

                <ThemeToggle />

                <button class="top-header__logout" on:click=on_logout>
                    {icon("log-out")}
                    <span>"Salir"</span>
                </button>
            </div>
        </header>
    }
}
