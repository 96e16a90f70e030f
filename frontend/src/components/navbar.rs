//! Top chrome. Observes the session store for its link set.

use crate::api::use_api;
use crate::auth::{logout, use_auth};
use crate::components::icons::AlertTriangle;
use crate::notify::use_notifier;
use crate::web::router::{Link, use_navigate};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let state = auth.state;
    let is_signed_in = move || state.with(|s| s.user.is_some());
    let is_admin = move || state.with(|s| s.user.as_ref().is_some_and(|u| u.is_admin));

    let on_logout = move |_| {
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match logout(&auth, &api).await {
                Ok(()) => navigate("/"),
                Err(err) => notifier.error(err.message()),
            }
        });
    };

    view! {
        <nav class="navbar bg-error text-white shadow-lg px-4">
            <div class="flex-1">
                <Link to="/">
                    <span class="flex items-center gap-2 text-xl font-bold">
                        <span class="h-8 w-8"><AlertTriangle /></span>
                        "Ajali!"
                    </span>
                </Link>
            </div>
            <div class="flex-none flex items-center gap-4">
                <Show
                    when=is_signed_in
                    fallback=|| view! {
                        <Link to="/login">
                            <span class="hover:opacity-80">"Login"</span>
                        </Link>
                        <Link to="/register">
                            <span class="btn btn-sm border-0 bg-red-700 hover:bg-red-800 text-white">
                                "Register"
                            </span>
                        </Link>
                    }
                >
                    <Link to="/dashboard">
                        <span class="hover:opacity-80">"Dashboard"</span>
                    </Link>
                    <Show when=is_admin>
                        <Link to="/admin">
                            <span class="hover:opacity-80">"Admin"</span>
                        </Link>
                    </Show>
                    <button
                        on:click=on_logout.clone()
                        class="btn btn-sm border-0 bg-red-700 hover:bg-red-800 text-white"
                    >
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
