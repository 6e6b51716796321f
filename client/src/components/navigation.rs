//! Top navigation bar.
//!
//! Links depend on the signed-in role; anonymous visitors only see the
//! login and register entries.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::notice::use_notifier;
use crate::state::session::{Role, use_session};

/// `(href, label)` pairs for a visitor with `role`.
pub fn nav_links(role: Option<Role>) -> Vec<(&'static str, &'static str)> {
    match role {
        None => vec![("/login", "Login"), ("/register", "Register")],
        Some(Role::Member) => vec![
            ("/books", "Books"),
            ("/loans", "Loans"),
            ("/dashboard/member", "Dashboard"),
            ("/profile", "Profile"),
        ],
        Some(Role::Admin) => vec![
            ("/books", "Books"),
            ("/admin/loans", "Loans"),
            ("/dashboard/admin", "Dashboard"),
            ("/admin/users", "Users"),
            ("/profile", "Profile"),
        ],
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let role = move || session.current().map(|identity| identity.role);

    let on_logout = move |_| {
        session.logout();
        notifier.info("Logged out");
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="nav">
            <A href="/" attr:class="nav__brand">
                "📚 LMS"
            </A>
            <div class="nav__links">
                {move || {
                    nav_links(role())
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <A href=href attr:class="nav__link">
                                    {label}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || role().is_some()>
                    <button class="btn nav__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
