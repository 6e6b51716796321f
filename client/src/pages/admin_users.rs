//! Admin user directory: stats, fuzzy search, and deletion.

use leptos::prelude::*;

use crate::components::route_guard::RouteGuard;
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::gateway::browser_gateway;
use crate::net::types::UserRecord;
use crate::state::loans::format_date;
use crate::state::notice::use_notifier;
use crate::state::session::{Role, use_session};
use crate::state::users::{UserStats, search_users};
use crate::util::auth::RouteAccess;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <RouteGuard access=RouteAccess::AdminOnly>
            <UserDirectory />
        </RouteGuard>
    }
}

#[component]
fn UserDirectory() -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();
    let users = RwSignal::new(Vec::<UserRecord>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let deleting = RwSignal::new(None::<String>);
    let confirm_target = RwSignal::new(None::<(String, String)>);

    Effect::new(move || {
        let Some(token) = session.token() else {
            notifier.error("Not authenticated");
            loading.set(false);
            return;
        };
        leptos::task::spawn_local(async move {
            match api::list_users(&browser_gateway(), &token).await {
                Ok(list) => users.set(list),
                Err(_) => {
                    notifier.error("Failed to fetch users");
                    users.set(Vec::new());
                }
            }
            loading.set(false);
        });
    });

    let on_confirm_delete = move |_| {
        let Some((user_id, _)) = confirm_target.get_untracked() else {
            return;
        };
        confirm_target.set(None);
        let Some(token) = session.token() else {
            notifier.error("Not authenticated");
            return;
        };
        deleting.set(Some(user_id.clone()));
        leptos::task::spawn_local(async move {
            match api::delete_user(&browser_gateway(), &token, &user_id).await {
                Ok(()) => {
                    notifier.success("User deleted successfully");
                    users.update(|list| list.retain(|u| u.id != user_id));
                }
                Err(e) => notifier.error(e.to_string()),
            }
            deleting.set(None);
        });
    };

    let stats = move || users.with(|list| UserStats::from_users(list));
    let visible = move || users.with(|list| search_users(list, &search.get()));

    view! {
        <div class="page admin-users-page">
            <header class="page__header">
                <h1>"User Management"</h1>
            </header>
            <div class="stat-grid">
                {move || {
                    let s = stats();
                    view! {
                        <StatCard label="Total Users" value=i64::try_from(s.total).unwrap_or_default() />
                        <StatCard label="Admins" value=i64::try_from(s.admins).unwrap_or_default() tone="admin" />
                        <StatCard label="Members" value=i64::try_from(s.members).unwrap_or_default() tone="member" />
                    }
                }}
            </div>
            <div class="search-bar">
                <input
                    class="search-bar__input"
                    type="search"
                    placeholder="Search by email or name..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="btn" type="button" on:click=move |_| search.set(String::new())>
                    "Clear"
                </button>
            </div>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__placeholder">"Loading users..."</p> }
            >
                {move || {
                    let rows = visible();
                    if rows.is_empty() {
                        return view! {
                            <p class="page__placeholder">"No users found. Try adjusting your search."</p>
                        }
                            .into_any();
                    }
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th>"Joined"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|user| {
                                        let joined = user.created_at.map_or_else(|| "N/A".to_owned(), format_date);
                                        let target = (user.id.clone(), user.name.clone());
                                        let row_id = user.id.clone();
                                        let is_admin = user.role() == Some(Role::Admin);
                                        let role_label = user.role_label();
                                        let is_deleting = move || deleting.get().as_deref() == Some(row_id.as_str());
                                        let is_deleting_attr = is_deleting.clone();
                                        view! {
                                            <tr>
                                                <td>{user.name}</td>
                                                <td>{user.email}</td>
                                                <td>
                                                    <span class="badge" class:badge--admin=is_admin>
                                                        {role_label}
                                                    </span>
                                                </td>
                                                <td>{joined}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--danger btn--small"
                                                        disabled=is_deleting_attr
                                                        on:click=move |_| confirm_target.set(Some(target.clone()))
                                                    >
                                                        {move || if is_deleting() { "Deleting..." } else { "Delete" }}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }}
            </Show>
            <Show when=move || confirm_target.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| confirm_target.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete User"</h2>
                        <p class="dialog__danger">
                            {move || {
                                let name = confirm_target.get().map(|(_, name)| name).unwrap_or_default();
                                format!("Are you sure you want to delete {name}?")
                            }}
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| confirm_target.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=on_confirm_delete>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
