//! Form validation and user-facing error wording.
//!
//! Each validator returns the first failing rule's message so pages can
//! raise a single error notice.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::gateway::ApiError;

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const FILL_REQUIRED_FIELDS: &str = "Please fill all required fields";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// `local@domain.tld` shape check; no deliverability guarantees.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Fail with `message` if any field is empty.
pub fn require_filled(fields: &[&str], message: &'static str) -> Result<(), &'static str> {
    if fields.iter().any(|f| f.is_empty()) { Err(message) } else { Ok(()) }
}

pub fn validate_login(email: &str, password: &str) -> Result<(), &'static str> {
    require_filled(&[email, password], FILL_ALL_FIELDS)
}

pub fn validate_registration(name: &str, email: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    require_filled(&[name, email, password, confirm], FILL_ALL_FIELDS)?;
    if name.chars().count() < 2 {
        return Err("Name must be at least 2 characters");
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email address");
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Title and ISBN are required; quantity is taken as entered.
pub fn validate_book_form(title: &str, isbn: &str) -> Result<(), &'static str> {
    require_filled(&[title.trim(), isbn.trim()], FILL_REQUIRED_FIELDS)
}

/// Parse the quantity field; blank or malformed input counts as zero.
pub fn parse_quantity(raw: &str) -> i64 {
    raw.trim().parse::<i64>().map_or(0, |n| n.max(0))
}

/// Login failures reworded for people rather than HTTP.
pub fn login_failure_message(err: &ApiError) -> String {
    let message = err.to_string();
    if err.status() == Some(401) || message.contains("Unauthorized") {
        return "Invalid email or password".to_owned();
    }
    if err.status() == Some(400) || message.contains("validation") {
        return "Please check your email and password format".to_owned();
    }
    if message.is_empty() { "Login failed. Please try again.".to_owned() } else { message }
}

/// Greeting after login, keyed on the role the backend reported.
pub fn welcome_message(role: Option<&str>) -> &'static str {
    match role {
        Some(r) if r.eq_ignore_ascii_case("ADMIN") => "Welcome Admin!",
        _ => "Welcome Member!",
    }
}
