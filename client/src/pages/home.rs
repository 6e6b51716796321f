//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="page home-page">
            <section class="home-page__hero">
                <h1>"📚 Library Management System"</h1>
                {move || match session.current() {
                    None => {
                        view! {
                            <p>
                                "Your complete solution for managing library books and loans. Browse our collection, borrow books, and track your reading journey."
                            </p>
                            <div class="home-page__actions">
                                <A href="/login" attr:class="btn btn--primary">
                                    "Login"
                                </A>
                                <A href="/register" attr:class="btn">
                                    "Register"
                                </A>
                            </div>
                        }
                            .into_any()
                    }
                    Some(identity) => {
                        let greeting = if identity.name.is_empty() {
                            "Welcome back!".to_owned()
                        } else {
                            format!("Welcome back, {}!", identity.name)
                        };
                        let (dashboard, loans) = if identity.is_admin() {
                            ("/dashboard/admin", "/admin/loans")
                        } else {
                            ("/dashboard/member", "/loans")
                        };
                        view! {
                            <p>{greeting}</p>
                            <div class="home-page__actions">
                                <A href="/books" attr:class="btn btn--primary">
                                    "Browse Books"
                                </A>
                                <A href=loans attr:class="btn">
                                    "Loans"
                                </A>
                                <A href=dashboard attr:class="btn">
                                    "Dashboard"
                                </A>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>
            <section class="home-page__features">
                <article class="feature-card">
                    <span class="feature-card__icon">"📖"</span>
                    <h3>"Browse Books"</h3>
                    <p>"Explore our extensive collection of books with powerful search capabilities."</p>
                </article>
                <article class="feature-card">
                    <span class="feature-card__icon">"🚀"</span>
                    <h3>"Easy Borrowing"</h3>
                    <p>"Borrow available books in one click and return them when you are done."</p>
                </article>
                <article class="feature-card">
                    <span class="feature-card__icon">"📊"</span>
                    <h3>"Track Loans"</h3>
                    <p>"Follow your active loans and reading history from your dashboard."</p>
                </article>
            </section>
        </div>
    }
}
