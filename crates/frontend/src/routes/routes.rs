use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::StaticSegment;

use crate::dashboards::ClientInsightsDashboard;
use crate::system::auth::guard::{RequireAuth, RequireGuest};
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;

/// `/login` and `/register` for guests, `/dashboard` for signed-in users; anything else goes to the dashboard
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <Redirect path="/dashboard" /> }>
            <Route
                path=StaticSegment("login")
                view=|| view! { <RequireGuest><LoginPage /></RequireGuest> }
            />
            <Route
                path=StaticSegment("register")
                view=|| view! { <RequireGuest><RegisterPage /></RequireGuest> }
            />
            <Route
                path=StaticSegment("dashboard")
                view=|| view! { <RequireAuth><ClientInsightsDashboard /></RequireAuth> }
            />
            <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard" /> } />
        </Routes>
    }
}
