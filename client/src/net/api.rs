//! Typed helpers for every backend endpoint the pages use.
//!
//! Each function builds an `ApiRequest`, sends it through the gateway, and
//! decodes the payload. Endpoints that answer with nothing useful return
//! `()` and ignore the body.
//!
//! ERROR HANDLING
//! ==============
//! All helpers return `ApiError` unchanged so pages decide how to phrase the
//! notice (verbatim, or remapped on the login page).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::json;

use super::gateway::{ApiError, ApiRequest, Gateway, Transport};
use super::types::{AdminStats, AuthResponse, Book, BookInput, Loan, MemberStats, UserRecord};

fn books_endpoint(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        "/books".to_owned()
    } else {
        format!("/books?q={}", urlencoding::encode(query))
    }
}

fn book_endpoint(book_id: &str) -> String {
    format!("/books/{}", urlencoding::encode(book_id))
}

fn return_loan_endpoint(loan_id: &str) -> String {
    format!("/loans/return/{}", urlencoding::encode(loan_id))
}

fn user_endpoint(user_id: &str) -> String {
    format!("/users/{}", urlencoding::encode(user_id))
}

fn users_by_email_endpoint(email: &str) -> String {
    format!("/users?email={}", urlencoding::encode(email))
}

// =============================================================
// Auth
// =============================================================

/// `POST /auth/login`.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn login<T: Transport>(gw: &Gateway<T>, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    gw.call_json(ApiRequest::post("/auth/login", json!({ "email": email, "password": password })))
        .await
}

/// `POST /auth/signup`.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn signup<T: Transport>(
    gw: &Gateway<T>,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    gw.call_json(ApiRequest::post(
        "/auth/signup",
        json!({ "name": name, "email": email, "password": password }),
    ))
    .await
}

/// `POST /auth/forgot-password`: mails an OTP to `email`.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn forgot_password<T: Transport>(gw: &Gateway<T>, email: &str) -> Result<(), ApiError> {
    gw.call(ApiRequest::post("/auth/forgot-password", json!({ "email": email })))
        .await
        .map(drop)
}

/// `POST /auth/verify-otp`.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn verify_otp<T: Transport>(gw: &Gateway<T>, email: &str, otp: &str) -> Result<(), ApiError> {
    gw.call(ApiRequest::post("/auth/verify-otp", json!({ "email": email, "otp": otp })))
        .await
        .map(drop)
}

/// `POST /auth/reset-password`, after a verified OTP.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn reset_password<T: Transport>(
    gw: &Gateway<T>,
    email: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<(), ApiError> {
    gw.call(ApiRequest::post(
        "/auth/reset-password",
        json!({ "email": email, "newPassword": new_password, "confirmPassword": confirm_password }),
    ))
    .await
    .map(drop)
}

/// `POST /auth/change-password`: checks the current password and mails an OTP.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn request_change_password<T: Transport>(
    gw: &Gateway<T>,
    token: &str,
    current_password: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<(), ApiError> {
    let body = json!({
        "currentPassword": current_password,
        "newPassword": new_password,
        "confirmPassword": confirm_password,
    });
    gw.call(ApiRequest::post("/auth/change-password", body).bearer(token))
        .await
        .map(drop)
}

/// `POST /auth/confirm-change-password`.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn confirm_change_password<T: Transport>(gw: &Gateway<T>, token: &str, otp: &str) -> Result<(), ApiError> {
    gw.call(ApiRequest::post("/auth/confirm-change-password", json!({ "otp": otp })).bearer(token))
        .await
        .map(drop)
}

// =============================================================
// Books
// =============================================================

/// `GET /books`, optionally filtered server-side by `query`.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn list_books<T: Transport>(gw: &Gateway<T>, query: &str) -> Result<Vec<Book>, ApiError> {
    gw.call_json(ApiRequest::get(books_endpoint(query))).await
}

/// `GET /books/{id}`.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn get_book<T: Transport>(gw: &Gateway<T>, book_id: &str) -> Result<Book, ApiError> {
    gw.call_json(ApiRequest::get(book_endpoint(book_id))).await
}

fn book_body(input: &BookInput) -> serde_json::Value {
    json!({ "title": input.title, "isbn": input.isbn, "quantity": input.quantity })
}

/// `POST /books` (admin).
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn create_book<T: Transport>(gw: &Gateway<T>, token: &str, input: &BookInput) -> Result<(), ApiError> {
    gw.call(ApiRequest::post("/books", book_body(input)).bearer(token))
        .await
        .map(drop)
}

/// `PATCH /books/{id}` (admin).
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn update_book<T: Transport>(
    gw: &Gateway<T>,
    token: &str,
    book_id: &str,
    input: &BookInput,
) -> Result<(), ApiError> {
    gw.call(ApiRequest::patch(book_endpoint(book_id), book_body(input)).bearer(token))
        .await
        .map(drop)
}

/// `DELETE /books/{id}` (admin).
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn delete_book<T: Transport>(gw: &Gateway<T>, token: &str, book_id: &str) -> Result<(), ApiError> {
    gw.call(ApiRequest::delete(book_endpoint(book_id)).bearer(token))
        .await
        .map(drop)
}

// =============================================================
// Loans
// =============================================================

/// `POST /loans/issue`: borrow one copy of `book_id`.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn issue_loan<T: Transport>(gw: &Gateway<T>, token: &str, book_id: &str) -> Result<(), ApiError> {
    gw.call(ApiRequest::post("/loans/issue", json!({ "bookId": book_id })).bearer(token))
        .await
        .map(drop)
}

/// `POST /loans/return/{id}`.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn return_loan<T: Transport>(gw: &Gateway<T>, token: &str, loan_id: &str) -> Result<(), ApiError> {
    gw.call(ApiRequest::post(return_loan_endpoint(loan_id), json!({})).bearer(token))
        .await
        .map(drop)
}

/// `GET /loans/my-loans`.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn my_loans<T: Transport>(gw: &Gateway<T>, token: &str) -> Result<Vec<Loan>, ApiError> {
    gw.call_json(ApiRequest::get("/loans/my-loans").bearer(token)).await
}

/// `GET /loans/active` (admin).
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn all_loans<T: Transport>(gw: &Gateway<T>, token: &str) -> Result<Vec<Loan>, ApiError> {
    gw.call_json(ApiRequest::get("/loans/active").bearer(token)).await
}

// =============================================================
// Users
// =============================================================

/// `GET /users` (admin). A non-array payload yields an empty list.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn list_users<T: Transport>(gw: &Gateway<T>, token: &str) -> Result<Vec<UserRecord>, ApiError> {
    let payload = gw.call(ApiRequest::get("/users").bearer(token)).await?;
    if !payload.is_array() {
        return Ok(Vec::new());
    }
    super::gateway::decode(payload)
}

/// `GET /users?email=...`, returning the first match.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn find_user_by_email<T: Transport>(
    gw: &Gateway<T>,
    token: &str,
    email: &str,
) -> Result<Option<UserRecord>, ApiError> {
    let payload = gw.call(ApiRequest::get(users_by_email_endpoint(email)).bearer(token)).await?;
    if !payload.is_array() {
        return Ok(None);
    }
    let users: Vec<UserRecord> = super::gateway::decode(payload)?;
    Ok(users.into_iter().next())
}

/// `DELETE /users/{id}` (admin).
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn delete_user<T: Transport>(gw: &Gateway<T>, token: &str, user_id: &str) -> Result<(), ApiError> {
    gw.call(ApiRequest::delete(user_endpoint(user_id)).bearer(token))
        .await
        .map(drop)
}

// =============================================================
// Dashboards
// =============================================================

/// `GET /dashboard/admin`.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn admin_dashboard<T: Transport>(gw: &Gateway<T>, token: &str) -> Result<AdminStats, ApiError> {
    gw.call_json(ApiRequest::get("/dashboard/admin").bearer(token)).await
}

/// `GET /dashboard/user`.
///
/// # Errors
///
/// Propagates gateway errors.
pub async fn member_dashboard<T: Transport>(gw: &Gateway<T>, token: &str) -> Result<MemberStats, ApiError> {
    gw.call_json(ApiRequest::get("/dashboard/user").bearer(token)).await
}

/// `POST /users/upload-avatar` as multipart form data with field `image`.
///
/// Multipart bodies bypass the JSON gateway but share its response handling.
///
/// # Errors
///
/// Returns `ApiError::Network` if the upload cannot be sent and the
/// normalized status error for non-2xx responses.
#[cfg(feature = "hydrate")]
pub async fn upload_avatar(
    config: &crate::config::ApiConfig,
    token: &str,
    file: &web_sys::File,
) -> Result<super::types::AvatarUpload, ApiError> {
    use super::gateway::{RawResponse, decode, interpret_response};

    let form = web_sys::FormData::new().map_err(|_| ApiError::Network)?;
    form.append_with_blob("image", file).map_err(|_| ApiError::Network)?;
    let resp = gloo_net::http::Request::post(&config.endpoint("/users/upload-avatar"))
        .header("Authorization", &format!("Bearer {token}"))
        .body(form)
        .map_err(|_| ApiError::Network)?
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    let raw = RawResponse {
        status: resp.status(),
        status_text: resp.status_text(),
        body: resp.text().await.unwrap_or_default(),
    };
    decode(interpret_response(&raw)?)
}
