//! Ajali! incident-reporting client.
//!
//! Context-driven architecture:
//! - `web::route` / `web::router`: route table and the guard-enforcing
//!   History-API router
//! - `api`: HTTP binding to the back end (cookie sessions)
//! - `auth`: session store, probed once at mount
//! - `notify`: toast layer
//! - `components`: UI layer

pub mod api;
pub mod auth;
pub mod notify;

mod components {
    pub mod admin_dashboard;
    pub mod dashboard;
    mod footer;
    mod icons;
    pub mod incident_form;
    pub mod incident_list;
    pub mod incident_map;
    pub mod incident_post;
    pub mod landing;
    pub mod login;
    mod navbar;
    pub mod register;

    pub use footer::Footer;
    pub use navbar::Navbar;
}

// Native Web API wrappers (router, Leaflet, dates, share).
pub(crate) mod web;

use leptos::prelude::*;

use crate::api::AjaliApi;
use crate::auth::{AuthContext, init_auth};
use crate::components::admin_dashboard::AdminDashboardPage;
use crate::components::dashboard::DashboardPage;
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;
use crate::components::{Footer, Navbar};
use crate::notify::{Notifier, ToastHost};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// Maps the guarded route to its page view.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Admin => view! { <AdminDashboardPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh] bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Root-provided capabilities: API client, session store, toasts.
    let api = AjaliApi::default();
    provide_context(api.clone());

    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    let notifier = Notifier::new();
    provide_context(notifier);

    // Probe the cookie session; until it resolves the store reports no user.
    init_auth(&auth_ctx, &api);

    // The router guards through injected session signals only.
    let is_authenticated = auth_ctx.is_authenticated_signal();
    let is_admin = auth_ctx.is_admin_signal();

    view! {
        <Router is_authenticated=is_authenticated is_admin=is_admin>
            <div class="min-h-screen flex flex-col">
                <Navbar />
                <main class="flex-1">
                    <RouterOutlet matcher=route_matcher />
                </main>
                <Footer />
            </div>
            <ToastHost />
        </Router>
    }
}
