//! Profile page: identity details and avatar upload.
//!
//! The backend record is optional. When the lookup fails or finds nothing,
//! the page still renders from the session, deriving a display name from
//! the email address.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::route_guard::RouteGuard;
use crate::net::api;
use crate::net::gateway::browser_gateway;
use crate::net::types::UserRecord;
use crate::state::loans::format_date;
use crate::state::notice::use_notifier;
use crate::state::session::{Identity, Role, use_session};
use crate::util::auth::RouteAccess;
use crate::util::format::{derive_name_from_email, initials};

/// What the profile card shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ProfileView {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub joined: String,
    pub image: Option<String>,
}

impl ProfileView {
    /// Merge the session identity with the backend record, if any.
    pub(crate) fn build(identity: &Identity, found: Option<&UserRecord>) -> Self {
        let name = found
            .map(|u| u.name.as_str())
            .filter(|n| !n.is_empty())
            .map_or_else(|| derive_name_from_email(&identity.email), str::to_owned);
        Self {
            name,
            email: identity.email.clone(),
            role: identity.role,
            joined: found.and_then(|u| u.created_at).map_or_else(|| "N/A".to_owned(), format_date),
            image: found.and_then(|u| u.profile_image.clone()).filter(|s| !s.is_empty()),
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RouteGuard access=RouteAccess::Authenticated>
            <ProfileCard />
        </RouteGuard>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();
    let profile = RwSignal::new(None::<ProfileView>);
    let uploading = RwSignal::new(false);

    let load = move || {
        let Some(identity) = session.current() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let found = api::find_user_by_email(&browser_gateway(), &identity.token, &identity.email)
                .await
                .unwrap_or_else(|e| {
                    leptos::logging::warn!("profile lookup failed: {e}");
                    None
                });
            profile.set(Some(ProfileView::build(&identity, found.as_ref())));
        });
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if !requested.get_untracked() {
            requested.set(true);
            load();
        }
    });

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(token) = session.token() else {
                return;
            };
            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if let Ok(preview) = web_sys::Url::create_object_url_with_blob(&file) {
                profile.update(|p| {
                    if let Some(p) = p {
                        p.image = Some(preview);
                    }
                });
            }
            uploading.set(true);
            leptos::task::spawn_local(async move {
                match api::upload_avatar(&crate::config::ApiConfig::from_env(), &token, &file).await {
                    Ok(upload) => {
                        let url = crate::util::format::cache_busted(&upload.profile_image, now_millis());
                        profile.update(|p| {
                            if let Some(p) = p {
                                p.image = Some(url);
                            }
                        });
                        notifier.success("Profile picture updated");
                    }
                    Err(e) => {
                        leptos::logging::warn!("avatar upload failed: {e}");
                        notifier.error(e.to_string());
                        load();
                    }
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, notifier);
    };

    view! {
        <div class="page profile-page">
            {move || {
                let Some(p) = profile.get() else {
                    return view! { <p class="page__placeholder">"Loading profile..."</p> }.into_any();
                };
                let avatar = match p.image.clone() {
                    Some(src) => view! { <img class="profile-card__avatar" src=src alt="Profile picture" /> }.into_any(),
                    None => view! { <span class="profile-card__avatar profile-card__avatar--initials">{initials(&p.name)}</span> }
                        .into_any(),
                };
                view! {
                    <div class="profile-card">
                        <div class="profile-card__media">
                            {avatar}
                            <label class="btn profile-card__upload">
                                {move || if uploading.get() { "Uploading..." } else { "Change Photo" }}
                                <input type="file" accept="image/*" hidden=true on:change=on_file />
                            </label>
                        </div>
                        <h1 class="profile-card__name">{p.name}</h1>
                        <dl class="profile-card__details">
                            <dt>"Email"</dt>
                            <dd>{p.email}</dd>
                            <dt>"Role"</dt>
                            <dd>
                                <span class="badge" class:badge--admin={p.role == Role::Admin}>
                                    {p.role.display_name()}
                                </span>
                            </dd>
                            <dt>"Joined"</dt>
                            <dd>{p.joined}</dd>
                        </dl>
                        <A href="/change-password" attr:class="btn">
                            "Change Password"
                        </A>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}
