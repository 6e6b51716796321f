//! Password recovery wizard: email, then OTP, then a new password.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::gateway::browser_gateway;
use crate::state::notice::use_notifier;
use crate::util::validate::{FILL_ALL_FIELDS, require_filled};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Email,
    Otp,
    NewPassword,
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let notifier = use_notifier();
    let navigate = use_navigate();

    let step = RwSignal::new(Step::Email);
    let email = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let current = step.get_untracked();
        let fields = match current {
            Step::Email => vec![email_value.clone()],
            Step::Otp => vec![otp.get_untracked().trim().to_owned()],
            Step::NewPassword => vec![new_password.get_untracked(), confirm.get_untracked()],
        };
        let refs: Vec<&str> = fields.iter().map(String::as_str).collect();
        if let Err(message) = require_filled(&refs, FILL_ALL_FIELDS) {
            notifier.error(message);
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let gw = browser_gateway();
            let result = match current {
                Step::Email => api::forgot_password(&gw, &email_value).await,
                Step::Otp => api::verify_otp(&gw, &email_value, &fields[0]).await,
                Step::NewPassword => api::reset_password(&gw, &email_value, &fields[0], &fields[1]).await,
            };
            busy.set(false);
            match (result, current) {
                (Err(e), _) => notifier.error(e.to_string()),
                (Ok(()), Step::Email) => {
                    notifier.info("OTP sent to your email");
                    step.set(Step::Otp);
                }
                (Ok(()), Step::Otp) => step.set(Step::NewPassword),
                (Ok(()), Step::NewPassword) => {
                    notifier.success("Password reset successful!");
                    navigate("/login", NavigateOptions::default());
                }
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
                <h1>"Forgot Password"</h1>
                <p class="auth-card__subtitle">
                    {move || match step.get() {
                        Step::Email => "Enter your account email to receive a one-time code.",
                        Step::Otp => "Enter the code we emailed you.",
                        Step::NewPassword => "Choose a new password.",
                    }}
                </p>
                <form class="auth-form" on:submit=on_submit>
                    {move || match step.get() {
                        Step::Email => input(email, "email", "Enter your email").into_any(),
                        Step::Otp => input(otp, "text", "Enter OTP").into_any(),
                        Step::NewPassword => {
                            view! {
                                {input(new_password, "password", "New Password")}
                                {input(confirm, "password", "Confirm Password")}
                            }
                                .into_any()
                        }
                    }}
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        {move || match (step.get(), busy.get()) {
                            (Step::Email, false) => "Send OTP",
                            (Step::Email, true) => "Sending...",
                            (Step::Otp, false) => "Verify OTP",
                            (Step::Otp, true) => "Verifying...",
                            (Step::NewPassword, false) => "Reset Password",
                            (Step::NewPassword, true) => "Updating...",
                        }}
                    </button>
                </form>
                <p class="auth-card__links">
                    <A href="/login">"Back to login"</A>
                </p>
            </div>
        </div>
    }
}
