//! Catalogue page: search, borrow, and admin maintenance.
//!
//! SYSTEM CONTEXT
//! ==============
//! Open to everyone. Borrowing needs a session; add, edit, and delete are
//! offered to admins only. The search box is debounced and every fetch is
//! generation-stamped so a slow response never overwrites a newer one.

use leptos::prelude::*;

use crate::components::book_card::BookCard;
use crate::components::book_form::BookForm;
use crate::net::api;
use crate::net::gateway::browser_gateway;
use crate::net::types::Book;
use crate::state::books::BooksState;
#[cfg(feature = "hydrate")]
use crate::state::books::SEARCH_DEBOUNCE_MS;
use crate::state::notice::{Notifier, use_notifier};
use crate::state::session::use_session;

/// Which form dialog is open.
#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Closed,
    Add,
    Edit(Book),
}

#[component]
pub fn BooksPage() -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();
    let books = RwSignal::new(BooksState::default());
    let query = RwSignal::new(String::new());
    let keystrokes = RwSignal::new(0_u64);
    let dialog = RwSignal::new(Dialog::Closed);
    let pending_delete = RwSignal::new(None::<String>);

    let is_admin = move || session.current().is_some_and(|identity| identity.is_admin());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        fetch_books(books, String::new(), notifier);
    });

    let on_search = move |ev: leptos::ev::Event| {
        query.set(event_target_value(&ev));
        keystrokes.update(|n| *n += 1);
        #[cfg(feature = "hydrate")]
        {
            let stamp = keystrokes.get_untracked();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                if keystrokes.get_untracked() == stamp {
                    fetch_books(books, query.get_untracked(), notifier);
                }
            });
        }
    };

    let refresh = move || fetch_books(books, query.get_untracked(), notifier);

    let on_borrow = Callback::new(move |book_id: String| {
        let Some(token) = session.token() else {
            notifier.error("Please login first");
            return;
        };
        leptos::task::spawn_local(async move {
            match api::issue_loan(&browser_gateway(), &token, &book_id).await {
                Ok(()) => {
                    notifier.success("Book borrowed successfully!");
                    refresh();
                }
                Err(e) => notifier.error(e.to_string()),
            }
        });
    });

    let on_delete_request = Callback::new(move |book_id: String| pending_delete.set(Some(book_id)));
    let on_delete_confirm = move |_| {
        let Some(book_id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let Some(token) = session.token() else {
            notifier.error("Unauthorized");
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_book(&browser_gateway(), &token, &book_id).await {
                Ok(()) => {
                    notifier.success("Book deleted successfully");
                    books.update(|s| s.remove(&book_id));
                }
                Err(e) => notifier.error(e.to_string()),
            }
        });
    };

    let on_edit = Callback::new(move |book: Book| dialog.set(Dialog::Edit(book)));
    let close_dialog = Callback::new(move |()| dialog.set(Dialog::Closed));
    let on_saved = Callback::new(move |()| {
        dialog.set(Dialog::Closed);
        refresh();
    });

    view! {
        <div class="page books-page">
            <header class="page__header">
                <h1>"Library Books"</h1>
                <Show when=is_admin>
                    <button class="btn btn--primary" on:click=move |_| dialog.set(Dialog::Add)>
                        "+ Add Book"
                    </button>
                </Show>
            </header>
            <input
                class="books-page__search"
                type="search"
                placeholder="Search by title or ISBN..."
                prop:value=move || query.get()
                on:input=on_search
            />
            <Show when=move || books.get().error.is_some()>
                <p class="page__error">{move || books.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !books.get().loading
                fallback=move || view! { <p class="page__placeholder">"Loading books..."</p> }
            >
                <Show
                    when=move || !books.get().items.is_empty()
                    fallback=move || view! { <p class="page__placeholder">"No books found."</p> }
                >
                    <div class="books-page__grid">
                        {move || {
                            let admin = is_admin();
                            books
                                .get()
                                .items
                                .into_iter()
                                .map(|book| {
                                    view! {
                                        <BookCard
                                            book=book
                                            is_admin=admin
                                            on_borrow=on_borrow
                                            on_edit=on_edit
                                            on_delete=on_delete_request
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
            {move || {
                let title = match dialog.get() {
                    Dialog::Closed => return None,
                    Dialog::Add => "Add New Book",
                    Dialog::Edit(_) => "Edit Book",
                };
                let book = match dialog.get_untracked() {
                    Dialog::Edit(book) => Some(book),
                    _ => None,
                };
                Some(view! {
                    <div class="dialog-backdrop" on:click=move |_| close_dialog.run(())>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h2>{title}</h2>
                            {match book {
                                Some(book) => view! { <BookForm book=book on_saved=on_saved on_cancel=close_dialog /> }.into_any(),
                                None => view! { <BookForm on_saved=on_saved on_cancel=close_dialog /> }.into_any(),
                            }}
                        </div>
                    </div>
                })
            }}
            <Show when=move || pending_delete.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| pending_delete.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete Book"</h2>
                        <p class="dialog__danger">"This will permanently remove the book from the catalogue."</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| pending_delete.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=on_delete_confirm>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Fetch the catalogue for `query`, dropping the result if a newer fetch
/// started meanwhile.
fn fetch_books(books: RwSignal<BooksState>, query: String, notifier: Notifier) {
    let mut generation = 0;
    books.update(|s| generation = s.begin_fetch());
    leptos::task::spawn_local(async move {
        let result = api::list_books(&browser_gateway(), query.trim()).await.map_err(|e| e.to_string());
        let failed = result.is_err();
        let mut applied = false;
        books.update(|s| applied = s.finish_fetch(generation, result));
        if applied && failed {
            notifier.error("Failed to fetch books");
        }
    });
}
