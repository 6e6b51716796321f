//! Catalogue card with role-dependent actions.

use leptos::prelude::*;

use crate::net::types::Book;
use crate::state::books::availability_label;

/// A book in the catalogue grid.
///
/// Members get a borrow button; admins get edit and delete.
#[component]
pub fn BookCard(
    book: Book,
    is_admin: bool,
    #[prop(optional)] on_borrow: Option<Callback<String>>,
    #[prop(optional)] on_edit: Option<Callback<Book>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let available = book.is_available();
    let label = availability_label(&book);
    let id = book.id.clone();
    let title = book.title.clone();
    let isbn = book.isbn.clone();

    let borrow_id = id.clone();
    let delete_id = id;
    let edit_book = book;

    view! {
        <article class="book-card">
            <h3 class="book-card__title">{title}</h3>
            <p class="book-card__isbn">"ISBN: " {isbn}</p>
            <p class="book-card__availability" class:book-card__availability--out={!available}>
                {label}
            </p>
            <div class="book-card__actions">
                {if is_admin {
                    view! {
                        <button
                            class="btn"
                            on:click=move |_| {
                                if let Some(cb) = on_edit {
                                    cb.run(edit_book.clone());
                                }
                            }
                        >
                            "Edit"
                        </button>
                        <button
                            class="btn btn--danger"
                            on:click=move |_| {
                                if let Some(cb) = on_delete {
                                    cb.run(delete_id.clone());
                                }
                            }
                        >
                            "Delete"
                        </button>
                    }
                        .into_any()
                } else {
                    view! {
                        <button
                            class="btn btn--primary"
                            disabled={!available}
                            on:click=move |_| {
                                if let Some(cb) = on_borrow {
                                    cb.run(borrow_id.clone());
                                }
                            }
                        >
                            {if available { "Borrow" } else { "Unavailable" }}
                        </button>
                    }
                        .into_any()
                }}
            </div>
        </article>
    }
}
