//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages wrap their content in `RouteGuard`.

pub mod admin_dashboard;
pub mod admin_loans;
pub mod admin_users;
pub mod book_edit;
pub mod books;
pub mod change_password;
pub mod forgot_password;
pub mod home;
pub mod loans;
pub mod login;
pub mod member_dashboard;
pub mod profile;
pub mod register;
