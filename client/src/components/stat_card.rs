//! Dashboard figures: single stat cards and proportional bar lists.

use leptos::prelude::*;

use crate::state::dashboard::{bar_percent, series_max};

#[component]
pub fn StatCard(label: &'static str, value: i64, #[prop(optional)] tone: &'static str) -> impl IntoView {
    let class = if tone.is_empty() { "stat-card".to_owned() } else { format!("stat-card stat-card--{tone}") };
    view! {
        <div class=class>
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
        </div>
    }
}

/// Horizontal bars scaled to the largest value.
#[component]
pub fn BarList(title: &'static str, rows: Vec<(String, i64)>) -> impl IntoView {
    let max = series_max(rows.iter().map(|(_, v)| *v));
    view! {
        <section class="bar-list">
            <h3 class="bar-list__title">{title}</h3>
            {if rows.is_empty() {
                view! { <p class="bar-list__empty">"No data yet."</p> }.into_any()
            } else {
                rows.into_iter()
                    .map(|(label, value)| {
                        let width = format!("width: {}%", bar_percent(value, max));
                        view! {
                            <div class="bar-list__row">
                                <span class="bar-list__label">{label}</span>
                                <span class="bar-list__track">
                                    <span class="bar-list__bar" style=width></span>
                                </span>
                                <span class="bar-list__value">{value}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </section>
    }
}
