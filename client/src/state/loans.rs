//! Loan list views: filtering, tallies, and day counting.
//!
//! DESIGN
//! ======
//! Member and admin loan pages share the same active/all filter and the
//! same "days out" arithmetic; only the rendering differs.

#[cfg(test)]
#[path = "loans_test.rs"]
mod loans_test;

use chrono::{DateTime, Utc};

use crate::net::types::Loan;

/// Which loans a list shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoanFilter {
    /// Loans not yet returned.
    #[default]
    Active,
    All,
}

impl LoanFilter {
    pub fn matches(self, loan: &Loan) -> bool {
        match self {
            Self::Active => !loan.is_returned(),
            Self::All => true,
        }
    }
}

/// Loans visible under `filter`, in backend order.
pub fn filter_loans(loans: &[Loan], filter: LoanFilter) -> Vec<Loan> {
    loans.iter().filter(|loan| filter.matches(loan)).cloned().collect()
}

/// Counts shown above loan lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoanStats {
    pub total: usize,
    pub active: usize,
    pub returned: usize,
}

impl LoanStats {
    pub fn from_loans(loans: &[Loan]) -> Self {
        let returned = loans.iter().filter(|loan| loan.is_returned()).count();
        Self { total: loans.len(), active: loans.len() - returned, returned }
    }
}

/// Whole days elapsed between issue and `now`, never negative.
pub fn days_out(issued_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - issued_at).num_days().max(0)
}

/// `"1 day"`, `"3 days"`.
pub fn format_days(days: i64) -> String {
    if days == 1 { "1 day".to_owned() } else { format!("{days} days") }
}

/// Calendar date for loan cards and tables.
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Message shown when a filtered member list is empty.
pub fn empty_member_message(filter: LoanFilter) -> &'static str {
    match filter {
        LoanFilter::Active => "You have no active loans. Start borrowing books!",
        LoanFilter::All => "No loan history yet.",
    }
}

/// Message shown when a filtered admin list is empty.
pub fn empty_admin_message(filter: LoanFilter) -> &'static str {
    match filter {
        LoanFilter::Active => "No active loans.",
        LoanFilter::All => "No loans yet.",
    }
}
