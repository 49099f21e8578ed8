use contracts::system::auth::MessageResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::api_utils::ApiError;
use crate::system::auth::api;

pub const SIGNUP_SUCCESS: &str = "Cuenta creada exitosamente. Redirigiendo al login...";
const REDIRECT_DELAY_MS: u32 = 2000;

/// A 2xx answer counts as success even when its body is not the expected JSON
pub fn signup_outcome(result: &Result<MessageResponse, ApiError>) -> Result<(), String> {
    match result {
        Ok(_) | Err(ApiError::Decode(_)) => Ok(()),
        Err(e) => Err(e.user_message("Falló el registro")),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (success_message, set_success_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked();
        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let navigate = navigate.clone();

        set_is_loading.set(true);
        set_error_message.set(None);
        set_success_message.set(None);

        spawn_local(async move {
            let result = api::signup(username_val, email_val, password_val).await;
            set_is_loading.set(false);
            match signup_outcome(&result) {
                Ok(()) => {
                    log::info!("Account created");
                    set_success_message.set(Some(SIGNUP_SUCCESS.to_string()));
                    gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate("/login?registered=1", Default::default());
                }
                Err(message) => {
                    log::warn!("Signup failed: {:?}", result.err());
                    set_error_message.set(Some(message));
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Crear Cuenta"</h1>
                <h2>"Regístrate para comenzar a usar la plataforma"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || success_message.get().is_some()>
                    <div class="success-message">
                        {move || success_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Nombre de usuario"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Nombre de usuario"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="email-address">"Correo Electrónico"</label>
                        <input
                            type="email"
                            id="email-address"
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
                            placeholder="Contraseña"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get() || success_message.get().is_some()
                    >
                        {move || if is_loading.get() { "Registrando..." } else { "Registrarse" }}
                    </button>
                </form>

                <div class="login-info">
                    "¿Ya tienes cuenta? "
                    <A href="/login">"Inicia sesión"</A>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_outcome() {
        let ok = Ok(MessageResponse {
            message: "Usuario registrado".into(),
        });
        assert_eq!(signup_outcome(&ok), Ok(()));

        assert_eq!(signup_outcome(&Err(ApiError::Decode("not json".into()))), Ok(()));

        let taken = Err(ApiError::Status {
            status: 400,
            message: Some("Error: Email is already in use!".into()),
        });
        assert_eq!(signup_outcome(&taken), Err("Error: Email is already in use!".to_string()));

        let offline = Err(ApiError::Network("offline".into()));
        assert_eq!(signup_outcome(&offline), Err("Falló el registro".to_string()));
    }
}
