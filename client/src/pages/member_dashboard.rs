//! Member dashboard: the signed-in member's own loan figures.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::route_guard::RouteGuard;
use crate::components::stat_card::{BarList, StatCard};
use crate::net::api;
use crate::net::gateway::browser_gateway;
use crate::net::types::MemberStats;
use crate::state::notice::use_notifier;
use crate::state::session::use_session;
use crate::util::auth::RouteAccess;

#[component]
pub fn MemberDashboardPage() -> impl IntoView {
    view! {
        <RouteGuard access=RouteAccess::Authenticated>
            <MemberFigures />
        </RouteGuard>
    }
}

#[component]
fn MemberFigures() -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();
    let stats = RwSignal::new(None::<MemberStats>);
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let Some(token) = session.token() else {
            loading.set(false);
            return;
        };
        leptos::task::spawn_local(async move {
            match api::member_dashboard(&browser_gateway(), &token).await {
                Ok(s) => stats.set(Some(s)),
                Err(e) => notifier.error(e.to_string()),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <h1>"My Loans Dashboard"</h1>
                <A href="/change-password" attr:class="btn">
                    "Change Password"
                </A>
            </header>
            {move || {
                if loading.get() {
                    return view! { <p class="page__placeholder">"Loading dashboard..."</p> }.into_any();
                }
                let Some(s) = stats.get() else {
                    return view! { <p class="page__placeholder">"Failed to load dashboard"</p> }.into_any();
                };
                let status_rows: Vec<_> = s.my_loan_status_chart.iter().map(|c| (c.name.clone(), c.value)).collect();
                view! {
                    <div class="stat-grid">
                        <StatCard label="Total Loans" value=s.my_total_loans />
                        <StatCard label="Active Loans" value=s.my_active_loans tone="active" />
                        <StatCard label="Returned Loans" value=s.my_returned_loans tone="returned" />
                        <StatCard label="Overdue Loans" value=s.my_overdue_loans tone="overdue" />
                    </div>
                    <BarList title="Loan Status" rows=status_rows />
                }
                    .into_any()
            }}
        </div>
    }
}
