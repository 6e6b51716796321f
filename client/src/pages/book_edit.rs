//! Standalone edit page for a single book (`/books/:id/edit`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::book_form::BookForm;
use crate::components::route_guard::RouteGuard;
use crate::net::api;
use crate::net::gateway::browser_gateway;
use crate::net::types::Book;
use crate::state::notice::use_notifier;
use crate::util::auth::RouteAccess;

#[component]
pub fn BookEditPage() -> impl IntoView {
    view! {
        <RouteGuard access=RouteAccess::AdminOnly>
            <EditBook />
        </RouteGuard>
    }
}

#[component]
fn EditBook() -> impl IntoView {
    let notifier = use_notifier();
    let navigate = use_navigate();
    let params = use_params_map();
    let book = RwSignal::new(None::<Book>);
    let failed = RwSignal::new(false);

    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")) else {
            failed.set(true);
            return;
        };
        leptos::task::spawn_local(async move {
            match api::get_book(&browser_gateway(), &id).await {
                Ok(found) => book.set(Some(found)),
                Err(_) => {
                    notifier.error("Failed to load book");
                    failed.set(true);
                }
            }
        });
    });

    let back_to_books = Callback::new(move |()| navigate("/books", NavigateOptions::default()));

    view! {
        <div class="page book-edit-page">
            <h1>"Edit Book"</h1>
            {move || match (book.get(), failed.get()) {
                (Some(found), _) => {
                    view! { <BookForm book=found on_saved=back_to_books on_cancel=back_to_books /> }.into_any()
                }
                (None, true) => view! { <p class="page__error">"Failed to load book"</p> }.into_any(),
                (None, false) => view! { <p class="page__placeholder">"Loading book..."</p> }.into_any(),
            }}
        </div>
    }
}
