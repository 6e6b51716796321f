//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` and `notice` are app-wide and provided through context by
//! `App`; the remaining modules hold page-scoped view state and the pure
//! helpers pages render from.

pub mod books;
pub mod dashboard;
pub mod loans;
pub mod notice;
pub mod session;
pub mod users;
