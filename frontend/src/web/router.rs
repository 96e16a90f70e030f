//! Router service - core engine.
//!
//! Wraps the History API; every pushState/replaceState call lives here.
//! Navigation flows request -> guard -> history -> load, with the session
//! signals injected so the router stays decoupled from the auth module.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, GuardDecision, evaluate_guard};

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Router service.
///
/// Signal-driven; the guard consults the injected session signals at every
/// navigation and redirects through the History API rather than rendering
/// substitute content.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
    is_admin: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>, is_admin: Signal<bool>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
            is_admin,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigate to a path, applying the guards.
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let decision = evaluate_guard(
            target,
            self.is_authenticated.get_untracked(),
            self.is_admin.get_untracked(),
        );

        if let GuardDecision::Redirect(to) = decision {
            web_sys::console::log_1(
                &format!("[Router] Guard redirected {target} -> {to}").into(),
            );
        }

        let loaded = decision.target();
        if use_push {
            push_history_state(loaded.to_path());
        } else {
            replace_history_state(loaded.to_path());
        }
        self.set_route.set(loaded);
    }

    /// Back/forward buttons re-run the guard against the restored path.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;
        let is_admin = self.is_admin;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            let decision = evaluate_guard(
                target,
                is_authenticated.get_untracked(),
                is_admin.get_untracked(),
            );
            if let GuardDecision::Redirect(to) = decision {
                replace_history_state(to.to_path());
            }
            set_route.set(decision.target());
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure to keep the listener alive for the app lifetime.
        closure.forget();
    }

    /// Re-apply the guard whenever the session signals change, so logout
    /// on a protected page and login on an auth form both redirect.
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;
        let is_admin = self.is_admin;

        Effect::new(move |_| {
            let decision = evaluate_guard(
                current_route.get_untracked(),
                is_authenticated.get(),
                is_admin.get(),
            );
            if let GuardDecision::Redirect(to) = decision {
                web_sys::console::log_1(
                    &format!("[Router] Session changed, redirecting to {to}").into(),
                );
                push_history_state(to.to_path());
                set_route.set(to);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>, is_admin: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated, is_admin);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// Fetch the router service from Context.
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// Returns a callable navigation closure.
pub fn use_navigate() -> impl Fn(&str) + Clone {
    let router = use_router();
    move |to: &str| {
        router.navigate(to);
    }
}

// ============================================================================
// UI components
// ============================================================================

/// Router root. Provides the routing context; mount once at the app root.
#[component]
pub fn Router(
    /// Session presence signal, injected by the auth module.
    is_authenticated: Signal<bool>,
    /// Admin flag signal, injected by the auth module.
    is_admin: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated, is_admin);

    children()
}

/// Renders the view the matcher returns for the current route.
#[component]
pub fn RouterOutlet(
    /// Maps the current route to its view.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// Anchor that navigates through the router instead of a full page load.
#[component]
pub fn Link(#[prop(into)] to: String, children: Children) -> impl IntoView {
    let router = use_router();

    let to_clone = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&to_clone);
    };

    view! {
        <a href=to on:click=on_click>
            {children()}
        </a>
    }
}
