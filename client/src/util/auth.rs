//! Route guards shared by protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same decision: wait until the session
//! has hydrated, send anonymous visitors to `/login`, and send members away
//! from admin-only screens.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionHandle};

/// Who may view a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Authenticated,
    AdminOnly,
}

/// Where to send the visitor, or `None` to stay.
pub fn guard_redirect(session: &Session, access: RouteAccess) -> Option<&'static str> {
    if !session.is_ready() {
        return None;
    }
    match (session.current(), access) {
        (None, _) => Some("/login"),
        (Some(identity), RouteAccess::AdminOnly) if !identity.is_admin() => Some("/books"),
        _ => None,
    }
}

/// Whether the guarded content may render yet.
pub fn guard_allows(session: &Session, access: RouteAccess) -> bool {
    session.is_ready() && session.current().is_some() && guard_redirect(session, access).is_none()
}

/// Redirect whenever the session no longer satisfies `access`.
pub fn install_auth_guard<F>(session: SessionHandle, access: RouteAccess, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = guard_redirect(&session.snapshot(), access) {
            navigate(target, NavigateOptions::default());
        }
    });
}
