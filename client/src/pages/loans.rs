//! Member loan list with return action.

use leptos::prelude::*;

use crate::components::loan_card::LoanCard;
use crate::components::route_guard::RouteGuard;
use crate::net::api;
use crate::net::gateway::browser_gateway;
use crate::net::types::Loan;
use crate::state::loans::{LoanFilter, LoanStats, empty_member_message, filter_loans};
use crate::state::notice::{Notifier, use_notifier};
use crate::state::session::{SessionHandle, use_session};
use crate::util::auth::RouteAccess;

#[component]
pub fn LoansPage() -> impl IntoView {
    view! {
        <RouteGuard access=RouteAccess::Authenticated>
            <MemberLoans />
        </RouteGuard>
    }
}

#[component]
fn MemberLoans() -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();
    let loans = RwSignal::new(Vec::<Loan>::new());
    let loading = RwSignal::new(true);
    let filter = RwSignal::new(LoanFilter::Active);
    let returning = RwSignal::new(None::<String>);

    Effect::new(move || fetch_my_loans(session, notifier, loans, loading));

    let on_return = Callback::new(move |loan_id: String| {
        let Some(token) = session.token() else {
            notifier.error("Not authenticated");
            return;
        };
        returning.set(Some(loan_id.clone()));
        leptos::task::spawn_local(async move {
            match api::return_loan(&browser_gateway(), &token, &loan_id).await {
                Ok(()) => {
                    notifier.success("Book returned successfully!");
                    fetch_my_loans(session, notifier, loans, loading);
                }
                Err(e) => notifier.error(e.to_string()),
            }
            returning.set(None);
        });
    });

    let stats = move || loans.with(|l| LoanStats::from_loans(l));

    view! {
        <div class="page loans-page">
            <header class="page__header">
                <h1>"My Loans"</h1>
            </header>
            <div class="filter-tabs">
                <button
                    class="filter-tabs__tab"
                    class:filter-tabs__tab--active=move || filter.get() == LoanFilter::Active
                    on:click=move |_| filter.set(LoanFilter::Active)
                >
                    {move || format!("Active ({})", stats().active)}
                </button>
                <button
                    class="filter-tabs__tab"
                    class:filter-tabs__tab--active=move || filter.get() == LoanFilter::All
                    on:click=move |_| filter.set(LoanFilter::All)
                >
                    {move || format!("All ({})", stats().total)}
                </button>
            </div>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__placeholder">"Loading loans..."</p> }
            >
                {move || {
                    let visible = loans.with(|l| filter_loans(l, filter.get()));
                    if visible.is_empty() {
                        return view! { <p class="page__placeholder">{empty_member_message(filter.get())}</p> }
                            .into_any();
                    }
                    view! {
                        <div class="loans-page__grid">
                            {visible
                                .into_iter()
                                .map(|loan| {
                                    let id = loan.id.clone();
                                    let busy = Signal::derive(move || returning.get().as_deref() == Some(id.as_str()));
                                    view! { <LoanCard loan=loan on_return=on_return returning=busy /> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }}
            </Show>
        </div>
    }
}

fn fetch_my_loans(session: SessionHandle, notifier: Notifier, loans: RwSignal<Vec<Loan>>, loading: RwSignal<bool>) {
    let Some(token) = session.token() else {
        notifier.error("Not authenticated");
        loading.set(false);
        return;
    };
    loading.set(true);
    leptos::task::spawn_local(async move {
        match api::my_loans(&browser_gateway(), &token).await {
            Ok(items) => loans.set(items),
            Err(_) => notifier.error("Failed to fetch loans"),
        }
        loading.set(false);
    });
}
