//! Session state.
//!
//! The store owns the single `Option<User>`; the router and navbar observe
//! it through the injected signals. The probe runs once at mount and
//! silently treats any failure as anonymous.

use crate::api::{AjaliApi, ApiError};
use ajali_shared::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Session state.
#[derive(Clone, Default, PartialEq)]
pub struct AuthState {
    /// The signed-in user, if any.
    pub user: Option<User>,
    /// True until the initial `/check_session` probe resolves.
    pub probing: bool,
}

/// Read/write signal pair over [`AuthState`], shared through Context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            user: None,
            probing: true,
        });
        Self { state, set_state }
    }

    /// Signal for the router guard: is anyone signed in?
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.user.is_some()))
    }

    /// Signal for the router guard: does the session carry the admin flag?
    pub fn is_admin_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.user.as_ref().is_some_and(|u| u.is_admin)))
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the session store provided at the application root.
///
/// Panics when the store was not wired in; that is a programmer error.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided at the app root")
}

/// Kick off the session probe. Until it resolves the store reports no
/// user; a transport failure is also treated as anonymous.
pub fn init_auth(ctx: &AuthContext, api: &AjaliApi) {
    let api = api.clone();
    let set_state = ctx.set_state;
    spawn_local(async move {
        let user = api.probe_session().await.ok().flatten();
        set_state.set(AuthState {
            user,
            probing: false,
        });
    });
}

/// Log in and, on success, install the returned user into the store.
/// Failures re-raise; the login form owns the messaging.
pub async fn login(
    ctx: &AuthContext,
    api: &AjaliApi,
    email: String,
    password: String,
) -> Result<(), ApiError> {
    let user = api.login(email, password).await?;
    ctx.set_state.update(|state| {
        state.user = Some(user);
        state.probing = false;
    });
    Ok(())
}

/// Create an account. Leaves the store untouched; the user logs in next.
pub async fn register(
    api: &AjaliApi,
    username: String,
    email: String,
    password: String,
) -> Result<(), ApiError> {
    api.register(username, email, password).await
}

/// End the session and clear the store. The router reacts to the signal
/// transition; no manual redirect here.
pub async fn logout(ctx: &AuthContext, api: &AjaliApi) -> Result<(), ApiError> {
    api.logout().await?;
    ctx.set_state.update(|state| state.user = None);
    Ok(())
}
