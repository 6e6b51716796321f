//! Two-step password change for signed-in users: passwords, then OTP.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::route_guard::RouteGuard;
use crate::net::api;
use crate::net::gateway::browser_gateway;
use crate::state::notice::use_notifier;
use crate::state::session::use_session;
use crate::util::auth::RouteAccess;
use crate::util::validate::{FILL_ALL_FIELDS, require_filled};

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    view! {
        <RouteGuard access=RouteAccess::Authenticated>
            <ChangePasswordWizard />
        </RouteGuard>
    }
}

#[component]
fn ChangePasswordWizard() -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let awaiting_otp = RwSignal::new(false);
    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_request = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(token) = session.token() else {
            notifier.error("Not authenticated");
            return;
        };
        let (cur, new, conf) = (current.get_untracked(), new_password.get_untracked(), confirm.get_untracked());
        if let Err(message) = require_filled(&[cur.as_str(), new.as_str(), conf.as_str()], FILL_ALL_FIELDS) {
            notifier.error(message);
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::request_change_password(&browser_gateway(), &token, &cur, &new, &conf).await {
                Ok(()) => {
                    notifier.info("OTP sent to your email");
                    awaiting_otp.set(true);
                }
                Err(e) => notifier.error(e.to_string()),
            }
            busy.set(false);
        });
    };

    let on_confirm = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(token) = session.token() else {
            notifier.error("Not authenticated");
            return;
        };
        let code = otp.get_untracked().trim().to_owned();
        if let Err(message) = require_filled(&[code.as_str()], FILL_ALL_FIELDS) {
            notifier.error(message);
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::confirm_change_password(&browser_gateway(), &token, &code).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    notifier.success("Password changed successfully!");
                    navigate("/dashboard/member", NavigateOptions::default());
                }
                Err(e) => notifier.error(e.to_string()),
            }
        });
    };

    let input = move |signal: RwSignal<String>, kind: &'static str, placeholder: &'static str| {
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
                <h1>"Change Password"</h1>
                <Show
                    when=move || awaiting_otp.get()
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_request>
                                {input(current, "password", "Current Password")}
                                {input(new_password, "password", "New Password")}
                                {input(confirm, "password", "Confirm New Password")}
                                <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Sending OTP..." } else { "Submit" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_confirm.clone()>
                        {input(otp, "text", "Enter OTP")}
                        <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Verifying..." } else { "Verify & Change Password" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
