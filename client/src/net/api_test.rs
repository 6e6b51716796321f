use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::config::ApiConfig;
use crate::net::gateway::{Method, RawResponse, TransportError};

/// Answers every request with the same response and records it.
struct FixedTransport {
    status: u16,
    body: &'static str,
    sent: RefCell<Vec<(String, ApiRequest)>>,
}

impl FixedTransport {
    fn ok(body: &'static str) -> Self {
        Self { status: 200, body, sent: RefCell::default() }
    }
}

impl Transport for FixedTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        self.sent.borrow_mut().push((url.to_owned(), request.clone()));
        Ok(RawResponse { status: self.status, status_text: "OK".to_owned(), body: self.body.to_owned() })
    }
}

fn gateway(transport: FixedTransport) -> Gateway<FixedTransport> {
    Gateway::new(ApiConfig::new("http://backend"), transport)
}

fn last_sent(gw: &Gateway<FixedTransport>) -> (String, ApiRequest) {
    gw.transport().sent.borrow().last().cloned().unwrap()
}

#[test]
fn books_endpoint_omits_empty_query() {
    assert_eq!(books_endpoint(""), "/books");
    assert_eq!(books_endpoint("   "), "/books");
}

#[test]
fn books_endpoint_encodes_query() {
    assert_eq!(books_endpoint("war & peace"), "/books?q=war%20%26%20peace");
}

#[test]
fn id_endpoints_are_escaped() {
    assert_eq!(book_endpoint("b/1"), "/books/b%2F1");
    assert_eq!(return_loan_endpoint("l1"), "/loans/return/l1");
    assert_eq!(user_endpoint("u1"), "/users/u1");
    assert_eq!(users_by_email_endpoint("a+b@c.com"), "/users?email=a%2Bb%40c.com");
}

#[test]
fn login_posts_credentials_without_token() {
    let gw = gateway(FixedTransport::ok(r#"{"accessToken":"jwt","role":"member"}"#));
    let resp = block_on(login(&gw, "a@b.com", "secret")).unwrap();
    assert_eq!(resp.access_token.as_deref(), Some("jwt"));

    let (url, request) = last_sent(&gw);
    assert_eq!(url, "http://backend/auth/login");
    assert_eq!(request.method, Method::Post);
    assert!(request.token.is_none());
    assert_eq!(request.body.unwrap()["email"], "a@b.com");
}

#[test]
fn issue_loan_sends_book_id_with_bearer() {
    let gw = gateway(FixedTransport::ok(""));
    block_on(issue_loan(&gw, "tok", "b42")).unwrap();

    let (url, request) = last_sent(&gw);
    assert_eq!(url, "http://backend/loans/issue");
    assert_eq!(request.token.as_deref(), Some("tok"));
    assert_eq!(request.body.unwrap(), serde_json::json!({ "bookId": "b42" }));
}

#[test]
fn return_loan_posts_empty_object() {
    let gw = gateway(FixedTransport::ok(""));
    block_on(return_loan(&gw, "tok", "l7")).unwrap();

    let (url, request) = last_sent(&gw);
    assert_eq!(url, "http://backend/loans/return/l7");
    assert_eq!(request.body.unwrap(), serde_json::json!({}));
}

#[test]
fn update_book_patches_payload() {
    let gw = gateway(FixedTransport::ok("{}"));
    let input = BookInput { title: "Dune".into(), isbn: "978".into(), quantity: 4 };
    block_on(update_book(&gw, "tok", "b1", &input)).unwrap();

    let (url, request) = last_sent(&gw);
    assert_eq!(url, "http://backend/books/b1");
    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.body.unwrap()["quantity"], 4);
}

#[test]
fn list_users_treats_non_array_as_empty() {
    let gw = gateway(FixedTransport::ok(r#"{"users":[]}"#));
    let users = block_on(list_users(&gw, "tok")).unwrap();
    assert!(users.is_empty());
}

#[test]
fn find_user_by_email_takes_first_match() {
    let gw = gateway(FixedTransport::ok(
        r#"[{"id":"u1","name":"Ada","email":"a@b.com","role":"MEMBER"},{"id":"u2","name":"Bob","email":"b@b.com","role":"MEMBER"}]"#,
    ));
    let found = block_on(find_user_by_email(&gw, "tok", "a@b.com")).unwrap();
    assert_eq!(found.unwrap().id, "u1");
}

#[test]
fn find_user_by_email_handles_empty_list() {
    let gw = gateway(FixedTransport::ok("[]"));
    let found = block_on(find_user_by_email(&gw, "tok", "x@y.z")).unwrap();
    assert!(found.is_none());
}

#[test]
fn confirm_change_password_is_authenticated() {
    let gw = gateway(FixedTransport::ok(""));
    block_on(confirm_change_password(&gw, "tok", "123456")).unwrap();

    let (url, request) = last_sent(&gw);
    assert_eq!(url, "http://backend/auth/confirm-change-password");
    assert_eq!(request.token.as_deref(), Some("tok"));
    assert_eq!(request.body.unwrap()["otp"], "123456");
}

#[test]
fn reset_password_sends_camel_case_fields() {
    let gw = gateway(FixedTransport::ok(""));
    block_on(reset_password(&gw, "a@b.com", "newpass", "newpass")).unwrap();

    let (_, request) = last_sent(&gw);
    let body = request.body.unwrap();
    assert_eq!(body["newPassword"], "newpass");
    assert_eq!(body["confirmPassword"], "newpass");
}
