//! Admin user-directory views: tallies and fuzzy search.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::net::types::UserRecord;
use crate::state::session::Role;

/// Counts shown above the user table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub admins: usize,
    pub members: usize,
}

impl UserStats {
    pub fn from_users(users: &[UserRecord]) -> Self {
        let admins = users.iter().filter(|u| u.role() == Some(Role::Admin)).count();
        Self { total: users.len(), admins, members: users.len() - admins }
    }
}

/// Users whose email or name fuzzily matches `query`, best match first.
///
/// A blank query returns every user in backend order. Ties keep backend
/// order.
pub fn search_users(users: &[UserRecord], query: &str) -> Vec<UserRecord> {
    let query = query.trim();
    if query.is_empty() {
        return users.to_vec();
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let mut scored: Vec<(i64, usize)> = users
        .iter()
        .enumerate()
        .filter_map(|(idx, user)| {
            let email = matcher.fuzzy_match(&user.email, query);
            let name = matcher.fuzzy_match(&user.name, query);
            email.max(name).map(|score| (score, idx))
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    scored.into_iter().map(|(_, idx)| users[idx].clone()).collect()
}
