//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers live here so pages stay thin and the rules they apply can be
//! tested without a browser.

pub mod auth;
pub mod format;
pub mod validate;
