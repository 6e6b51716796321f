//! Self-service registration for member accounts.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::gateway::browser_gateway;
use crate::state::notice::use_notifier;
use crate::state::session::{Identity, Role, use_session};
use crate::util::validate::validate_registration;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (name_value, email_value) = (name.get_untracked(), email.get_untracked());
        let (password_value, confirm_value) = (password.get_untracked(), confirm.get_untracked());
        if let Err(message) = validate_registration(&name_value, &email_value, &password_value, &confirm_value) {
            notifier.error(message);
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::signup(&browser_gateway(), &name_value, &email_value, &password_value).await;
            busy.set(false);
            match result {
                Ok(resp) => {
                    let Some(token) = resp.access_token.filter(|t| !t.is_empty()) else {
                        notifier.error("Registration failed: No access token received");
                        return;
                    };
                    session.login(Identity { name: name_value, email: email_value, role: Role::Member, token });
                    notifier.success("Account created successfully! Welcome to Library Management System");
                    navigate("/books", NavigateOptions::default());
                }
                Err(e) => notifier.error(e.to_string()),
            }
        });
    };

    let field = move |signal: RwSignal<String>, kind: &'static str, placeholder: &'static str| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=placeholder
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Join the library as a member"</p>
                <form class="auth-form" on:submit=on_submit>
                    {field(name, "text", "Full name")}
                    {field(email, "email", "you@example.com")}
                    {field(password, "password", "Password (min 6 characters)")}
                    {field(confirm, "password", "Confirm password")}
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__links">
                    "Already have an account? "
                    <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
