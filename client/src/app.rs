//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation::Navigation;
use crate::components::notice_tray::NoticeTray;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_loans::AdminLoansPage, admin_users::AdminUsersPage,
    book_edit::BookEditPage, books::BooksPage, change_password::ChangePasswordPage,
    forgot_password::ForgotPasswordPage, home::HomePage, loans::LoansPage, login::LoginPage,
    member_dashboard::MemberDashboardPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::notice::{NoticeState, Notifier};
use crate::state::session::SessionHandle;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and notifier contexts, hydrates the session from
/// `localStorage` once mounted in the browser, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::new();
    let notifier = Notifier::new(RwSignal::new(NoticeState::default()));
    provide_context(session);
    provide_context(notifier);

    // Effects only run in the browser, so SSR renders the uninitialized phase.
    Effect::new(move || session.init());

    view! {
        <Stylesheet id="leptos" href="/pkg/library-portal.css"/>
        <Title text="Library Management System"/>

        <Router>
            <Navigation/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("change-password") view=ChangePasswordPage/>
                    <Route path=StaticSegment("books") view=BooksPage/>
                    <Route
                        path=(StaticSegment("books"), ParamSegment("id"), StaticSegment("edit"))
                        view=BookEditPage
                    />
                    <Route path=StaticSegment("loans") view=LoansPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("member")) view=MemberDashboardPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("admin")) view=AdminDashboardPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("loans")) view=AdminLoansPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("users")) view=AdminUsersPage/>
                </Routes>
            </main>
        </Router>
        <NoticeTray/>
    }
}
