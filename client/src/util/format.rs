//! Display formatting for profile data.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Friendly name from an email's local part: `jane.doe` → `Jane Doe`.
pub fn derive_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    local
        .split(['.', '_', '+', '-'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Append a cache-busting stamp so a replaced avatar reloads.
pub fn cache_busted(url: &str, stamp: u64) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}t={stamp}")
}

/// Up to two uppercase initials for the avatar placeholder.
pub fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|w| w.chars().next()).take(2).flat_map(char::to_uppercase).collect()
}
