//! Member-facing loan card.

use chrono::Utc;
use leptos::prelude::*;

use crate::net::types::Loan;
use crate::state::loans::{days_out, format_date, format_days};

#[component]
pub fn LoanCard(loan: Loan, on_return: Callback<String>, #[prop(into)] returning: Signal<bool>) -> impl IntoView {
    let returned = loan.is_returned();
    let issued = format_date(loan.issued_at);
    let out_for = format_days(days_out(loan.issued_at, Utc::now()));
    let returned_on = loan.returned_at.map(format_date);
    let id = loan.id;

    view! {
        <article class="loan-card" class:loan-card--returned=returned>
            <header class="loan-card__header">
                <h3 class="loan-card__title">{loan.book.title}</h3>
                <span class="loan-card__status">{if returned { "Returned" } else { "Active" }}</span>
            </header>
            <p class="loan-card__isbn">"ISBN: " {loan.book.isbn}</p>
            <p class="loan-card__issued">"Issued: " {issued}</p>
            {match returned_on {
                Some(date) => view! { <p class="loan-card__returned">"Returned: " {date}</p> }.into_any(),
                None => {
                    view! {
                        <p class="loan-card__days">"Days out: " {out_for}</p>
                        <button
                            class="btn btn--primary"
                            disabled=move || returning.get()
                            on:click=move |_| on_return.run(id.clone())
                        >
                            {move || if returning.get() { "Returning..." } else { "Return Book" }}
                        </button>
                    }
                        .into_any()
                }
            }}
        </article>
    }
}
