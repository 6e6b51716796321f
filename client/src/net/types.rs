//! Wire DTOs for the library backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's camelCase JSON so serde round-trips stay
//! lossless. They are transient view models: pages fetch them on mount and
//! drop them when unmounted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::session::Role;

/// A catalogue entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub isbn: String,
    /// Copies currently on the shelf.
    pub quantity: i64,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }
}

/// Create/update payload for `/books`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInput {
    pub title: String,
    pub isbn: String,
    pub quantity: i64,
}

impl From<&Book> for BookInput {
    fn from(book: &Book) -> Self {
        Self { title: book.title.clone(), isbn: book.isbn.clone(), quantity: book.quantity }
    }
}

/// Book summary embedded in a loan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanBook {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub isbn: String,
}

/// Borrower summary embedded in admin loan listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A single borrowing of a book.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    #[serde(default)]
    pub book_id: String,
    #[serde(default)]
    pub user_id: String,
    pub issued_at: DateTime<Utc>,
    #[serde(default)]
    pub returned_at: Option<DateTime<Utc>>,
    pub book: LoanBook,
    #[serde(default)]
    pub user: Option<LoanUser>,
}

impl Loan {
    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some()
    }
}

/// An account as listed by `/users`.
///
/// `role` is kept as sent so one unexpected value does not fail the whole
/// listing; use [`UserRecord::role`] for the parsed form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "role")]
    pub raw_role: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl UserRecord {
    /// Parsed role, `None` when the backend sent something unrecognized.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.raw_role)
    }

    /// Badge text: the canonical role name, or the raw value as sent.
    pub fn role_label(&self) -> String {
        self.role().map_or_else(|| self.raw_role.clone(), |role| role.as_str().to_owned())
    }
}

/// Body returned by `/auth/login` and `/auth/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// One named slice of a status breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: i64,
}

/// Loan count for one day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePoint {
    pub date: String,
    pub count: i64,
}

/// Figures for `/dashboard/admin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_loans: i64,
    pub active_loans: i64,
    pub returned_loans: i64,
    pub overdue_loans: i64,
    pub total_users: i64,
    #[serde(default)]
    pub loan_status_chart: Vec<ChartSlice>,
    #[serde(default)]
    pub loans_over_time: Vec<TimePoint>,
}

/// Figures for `/dashboard/user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub my_total_loans: i64,
    pub my_active_loans: i64,
    pub my_returned_loans: i64,
    pub my_overdue_loans: i64,
    #[serde(default)]
    pub my_loan_status_chart: Vec<ChartSlice>,
}

/// Body returned by `/users/upload-avatar`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarUpload {
    pub profile_image: String,
}
