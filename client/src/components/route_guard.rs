//! Wrapper that renders its children only for permitted visitors.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;
use crate::util::auth::{RouteAccess, guard_allows, guard_redirect, install_auth_guard};

/// Guards a route. Shows a placeholder while the session hydrates or a
/// redirect is pending.
#[component]
pub fn RouteGuard(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    install_auth_guard(session, access, use_navigate());

    let allowed = move || guard_allows(&session.snapshot(), access);
    let placeholder = move || {
        let text = if guard_redirect(&session.snapshot(), access).is_some() { "Redirecting..." } else { "Loading..." };
        view! { <p class="page__placeholder">{text}</p> }
    };

    view! {
        <Show when=allowed fallback=placeholder>
            {children()}
        </Show>
    }
}
