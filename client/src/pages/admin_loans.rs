//! Admin overview of every loan in the system.

use chrono::Utc;
use leptos::prelude::*;

use crate::components::route_guard::RouteGuard;
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::gateway::browser_gateway;
use crate::net::types::Loan;
use crate::state::loans::{LoanFilter, LoanStats, days_out, empty_admin_message, filter_loans, format_date, format_days};
use crate::state::notice::use_notifier;
use crate::state::session::use_session;
use crate::util::auth::RouteAccess;

#[component]
pub fn AdminLoansPage() -> impl IntoView {
    view! {
        <RouteGuard access=RouteAccess::AdminOnly>
            <LoanTable />
        </RouteGuard>
    }
}

#[component]
fn LoanTable() -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();
    let loans = RwSignal::new(Vec::<Loan>::new());
    let loading = RwSignal::new(true);
    let filter = RwSignal::new(LoanFilter::Active);

    Effect::new(move || {
        let Some(token) = session.token() else {
            notifier.error("Not authenticated");
            loading.set(false);
            return;
        };
        leptos::task::spawn_local(async move {
            match api::all_loans(&browser_gateway(), &token).await {
                Ok(items) => loans.set(items),
                Err(_) => notifier.error("Failed to fetch loans"),
            }
            loading.set(false);
        });
    });

    let stats = move || loans.with(|l| LoanStats::from_loans(l));
    let show_returned = move || filter.get() == LoanFilter::All;

    view! {
        <div class="page admin-loans-page">
            <header class="page__header">
                <h1>"Loan Management"</h1>
            </header>
            <div class="stat-grid">
                {move || {
                    let s = stats();
                    view! {
                        <StatCard label="Total Loans" value=count(s.total) />
                        <StatCard label="Active Loans" value=count(s.active) tone="active" />
                        <StatCard label="Returned" value=count(s.returned) tone="returned" />
                    }
                }}
            </div>
            <div class="filter-tabs">
                <button
                    class="filter-tabs__tab"
                    class:filter-tabs__tab--active=move || filter.get() == LoanFilter::Active
                    on:click=move |_| filter.set(LoanFilter::Active)
                >
                    {move || format!("Active Loans ({})", stats().active)}
                </button>
                <button
                    class="filter-tabs__tab"
                    class:filter-tabs__tab--active=show_returned
                    on:click=move |_| filter.set(LoanFilter::All)
                >
                    {move || format!("All Loans ({})", stats().total)}
                </button>
            </div>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__placeholder">"Loading loans..."</p> }
            >
                {move || {
                    let visible = loans.with(|l| filter_loans(l, filter.get()));
                    if visible.is_empty() {
                        return view! { <p class="page__placeholder">{empty_admin_message(filter.get())}</p> }.into_any();
                    }
                    let with_returned = show_returned();
                    let now = Utc::now();
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Book"</th>
                                    <th>"ISBN"</th>
                                    <th>"Borrower"</th>
                                    <th>"Email"</th>
                                    <th>"Issued"</th>
                                    <th>"Status"</th>
                                    {with_returned.then(|| view! { <th>"Returned"</th> })}
                                </tr>
                            </thead>
                            <tbody>
                                {visible
                                    .into_iter()
                                    .map(|loan| {
                                        let (borrower, email) = loan
                                            .user
                                            .as_ref()
                                            .map(|u| (u.name.clone(), u.email.clone()))
                                            .unwrap_or_else(|| ("Unknown".to_owned(), "-".to_owned()));
                                        let returned = loan.is_returned();
                                        let issued = format!(
                                            "{} ({} ago)",
                                            format_date(loan.issued_at),
                                            format_days(days_out(loan.issued_at, now)),
                                        );
                                        let returned_on = loan.returned_at.map_or_else(|| "-".to_owned(), format_date);
                                        view! {
                                            <tr>
                                                <td>{loan.book.title}</td>
                                                <td>{loan.book.isbn}</td>
                                                <td>{borrower}</td>
                                                <td>{email}</td>
                                                <td>{issued}</td>
                                                <td>
                                                    <span class="badge" class:badge--active={!returned}>
                                                        {if returned { "Returned" } else { "Active" }}
                                                    </span>
                                                </td>
                                                {with_returned.then(|| view! { <td>{returned_on}</td> })}
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
        </div>
    }
}

fn count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
