//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, forms, and chrome while reading the session and
//! notifier from Leptos context providers set up by `App`.

pub mod book_card;
pub mod book_form;
pub mod loan_card;
pub mod navigation;
pub mod notice_tray;
pub mod route_guard;
pub mod stat_card;
