use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Auth context provider component
///
/// The session is restored from localStorage before the first render, so
/// a reload does not flash the login page.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let initial = AuthState {
        token: storage::get_token(),
        user_info: storage::get_user(),
    };
    if initial.token.is_some() {
        log::debug!("Session restored from localStorage");
    }
    let (auth_state, set_auth_state) = signal(initial);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Persist a successful login and publish it to the app
pub fn complete_login(response: LoginResponse, set_auth_state: WriteSignal<AuthState>) {
    let user = response.user_info();
    storage::save_token(&response.token);
    storage::save_user(&user);

    set_auth_state.set(AuthState {
        token: Some(response.token),
        user_info: Some(user),
    });
}

/// Drop the session locally; the backend keeps no server-side session to revoke
pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
