//! Create/edit form for catalogue entries.
//!
//! The same form backs the add dialog, the edit dialog, and the standalone
//! edit page. ISBN is fixed once a book exists.

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::browser_gateway;
use crate::net::types::{Book, BookInput};
use crate::state::notice::use_notifier;
use crate::state::session::use_session;
use crate::util::validate::{parse_quantity, validate_book_form};

#[component]
pub fn BookForm(
    /// `Some` to edit an existing book.
    #[prop(optional)]
    book: Option<Book>,
    on_saved: Callback<()>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();

    let editing_id = book.as_ref().map(|b| b.id.clone());
    let is_edit = editing_id.is_some();
    let initial = book.as_ref().map(BookInput::from).unwrap_or_default();

    let title = RwSignal::new(initial.title);
    let isbn = RwSignal::new(initial.isbn);
    let quantity = RwSignal::new(if is_edit { initial.quantity.to_string() } else { "1".to_owned() });
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(token) = session.token() else {
            notifier.error("Please login first");
            return;
        };
        let input = BookInput {
            title: title.get_untracked().trim().to_owned(),
            isbn: isbn.get_untracked().trim().to_owned(),
            quantity: parse_quantity(&quantity.get_untracked()),
        };
        if let Err(message) = validate_book_form(&input.title, &input.isbn) {
            notifier.error(message);
            return;
        }
        submitting.set(true);
        let editing_id = editing_id.clone();
        leptos::task::spawn_local(async move {
            let gw = browser_gateway();
            let result = match editing_id.as_deref() {
                Some(id) => api::update_book(&gw, &token, id, &input).await.map(|()| "Book updated successfully"),
                None => api::create_book(&gw, &token, &input).await.map(|()| "Book created successfully"),
            };
            submitting.set(false);
            match result {
                Ok(message) => {
                    notifier.success(message);
                    on_saved.run(());
                }
                Err(e) => notifier.error(e.to_string()),
            }
        });
    };

    view! {
        <form class="book-form" on:submit=on_submit>
            <label class="book-form__label">
                "Title"
                <input
                    class="book-form__input"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <label class="book-form__label">
                "ISBN"
                <input
                    class="book-form__input"
                    type="text"
                    disabled=is_edit
                    prop:value=move || isbn.get()
                    on:input=move |ev| isbn.set(event_target_value(&ev))
                />
            </label>
            <label class="book-form__label">
                "Quantity"
                <input
                    class="book-form__input"
                    type="number"
                    min="0"
                    prop:value=move || quantity.get()
                    on:input=move |ev| quantity.set(event_target_value(&ev))
                />
            </label>
            <div class="book-form__actions">
                {on_cancel
                    .map(|cb| {
                        view! {
                            <button class="btn" type="button" on:click=move |_| cb.run(())>
                                "Cancel"
                            </button>
                        }
                    })}
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || match (submitting.get(), is_edit) {
                        (true, _) => "Saving...",
                        (false, true) => "Update Book",
                        (false, false) => "Add Book",
                    }}
                </button>
            </div>
        </form>
    }
}
