//! Login page: email + password against `/auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::gateway::browser_gateway;
use crate::net::types::AuthResponse;
use crate::state::notice::use_notifier;
use crate::state::session::{Identity, Role, use_session};
use crate::util::validate::{login_failure_message, validate_login, welcome_message};

/// Identity to adopt after a successful login response.
///
/// The response may omit `email` and `role`; the typed email and `MEMBER`
/// fill in.
pub(crate) fn identity_from_login(resp: &AuthResponse, typed_email: &str) -> Result<Identity, &'static str> {
    let token = resp.access_token.as_deref().filter(|t| !t.is_empty()).ok_or("Login failed: No access token received")?;
    let email = resp.email.as_deref().filter(|e| !e.is_empty()).unwrap_or(typed_email);
    let role = resp.role.as_deref().unwrap_or(Role::Member.as_str());
    Identity::from_parts(resp.name.as_deref().unwrap_or_default(), email, role, token)
        .ok_or("Login failed: Unrecognized account role")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(message) = validate_login(&email_value, &password_value) {
            notifier.error(message);
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::login(&browser_gateway(), &email_value, &password_value).await;
            busy.set(false);
            let resp = match result {
                Ok(resp) => resp,
                Err(e) => {
                    notifier.error(login_failure_message(&e));
                    return;
                }
            };
            match identity_from_login(&resp, &email_value) {
                Ok(identity) => {
                    session.login(identity);
                    notifier.success(welcome_message(resp.role.as_deref()));
                    navigate("/books", NavigateOptions::default());
                }
                Err(message) => notifier.error(message),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to your library account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__links">
                    <A href="/forgot-password">"Forgot password?"</A>
                </p>
                <p class="auth-card__links">
                    "Don't have an account? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
