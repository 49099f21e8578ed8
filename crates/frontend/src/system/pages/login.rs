use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::shared::api_utils::ApiError;
use crate::system::auth::{api, context::complete_login, context::use_auth};

pub const REGISTERED_NOTICE: &str = "Cuenta creada exitosamente. Por favor, inicia sesión.";

/// Text shown for a failed login
pub fn login_error_message(error: &ApiError) -> String {
    if error.is_network() {
        return "Falló la conexión con el servidor".to_string();
    }
    error.user_message("Error al iniciar sesión")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();
    let registered = move || query.with(|q| q.get("registered").is_some());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let navigate = navigate.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    log::info!("Signed in as {}", response.email);
                    complete_login(response, set_auth_state);
                    set_is_loading.set(false);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    set_error_message.set(Some(login_error_message(&e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Bienvenido"</h1>
                <h2>"Inicia sesión para acceder al Dashboard B2B"</h2>

                <Show when=registered>
                    <div class="success-message">{REGISTERED_NOTICE}</div>
                </Show>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email-address">"Correo Electrónico"</label>
                        <input
                            type="email"
                            id="email-address"
                            autocomplete="email"
                            placeholder="Correo Electrónico"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            placeholder="Contraseña"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Ingresando..." } else { "Iniciar Sesión" }}
                    </button>
                </form>

                <div class="login-info">
                    "¿No tienes cuenta? "
                    <A href="/register">"Regístrate aquí"</A>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_message() {
        let rejected = ApiError::Status {
            status: 401,
            message: Some("Credenciales inválidas".into()),
        };
        assert_eq!(login_error_message(&rejected), "Credenciales inválidas");

        let unreadable = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(login_error_message(&unreadable), "Error al iniciar sesión");

        let offline = ApiError::Network("connection refused".into());
        assert_eq!(login_error_message(&offline), "Falló la conexión con el servidor");
    }
}
