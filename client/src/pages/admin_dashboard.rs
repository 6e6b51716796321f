//! Admin dashboard: library-wide loan and user figures.

use leptos::prelude::*;

use crate::components::route_guard::RouteGuard;
use crate::components::stat_card::{BarList, StatCard};
use crate::net::api;
use crate::net::gateway::browser_gateway;
use crate::net::types::AdminStats;
use crate::state::notice::use_notifier;
use crate::state::session::use_session;
use crate::util::auth::RouteAccess;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <RouteGuard access=RouteAccess::AdminOnly>
            <AdminFigures />
        </RouteGuard>
    }
}

#[component]
fn AdminFigures() -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();
    let stats = RwSignal::new(None::<AdminStats>);
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let Some(token) = session.token() else {
            loading.set(false);
            return;
        };
        leptos::task::spawn_local(async move {
            match api::admin_dashboard(&browser_gateway(), &token).await {
                Ok(s) => stats.set(Some(s)),
                Err(e) => notifier.error(e.to_string()),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="page dashboard-page">
            <h1>"Admin Dashboard"</h1>
            {move || {
                if loading.get() {
                    return view! { <p class="page__placeholder">"Loading dashboard..."</p> }.into_any();
                }
                let Some(s) = stats.get() else {
                    return view! { <p class="page__placeholder">"Failed to load dashboard"</p> }.into_any();
                };
                let status_rows: Vec<_> = s.loan_status_chart.iter().map(|c| (c.name.clone(), c.value)).collect();
                let time_rows: Vec<_> = s.loans_over_time.iter().map(|p| (p.date.clone(), p.count)).collect();
                view! {
                    <div class="stat-grid">
                        <StatCard label="Total Loans" value=s.total_loans />
                        <StatCard label="Active Loans" value=s.active_loans tone="active" />
                        <StatCard label="Returned Loans" value=s.returned_loans tone="returned" />
                        <StatCard label="Overdue Loans" value=s.overdue_loans tone="overdue" />
                        <StatCard label="Total Users" value=s.total_users tone="users" />
                    </div>
                    <div class="chart-grid">
                        <BarList title="Loan Status" rows=status_rows />
                        <BarList title="Loans Over Time" rows=time_rows />
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
