use super::*;

#[test]
fn book_availability_follows_quantity() {
    let mut book = Book { id: "1".into(), title: "Dune".into(), isbn: "978".into(), quantity: 2 };
    assert!(book.is_available());
    book.quantity = 0;
    assert!(!book.is_available());
}

#[test]
fn book_input_serializes_backend_shape() {
    let input = BookInput { title: "Dune".into(), isbn: "978-0".into(), quantity: 3 };
    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value, serde_json::json!({ "title": "Dune", "isbn": "978-0", "quantity": 3 }));
}

#[test]
fn member_loan_parses_without_user() {
    let raw = r#"{
        "id": "l1",
        "bookId": "b1",
        "userId": "u1",
        "issuedAt": "2024-03-01T10:00:00.000Z",
        "returnedAt": null,
        "book": { "id": "b1", "title": "Dune", "isbn": "978" }
    }"#;
    let loan: Loan = serde_json::from_str(raw).unwrap();
    assert_eq!(loan.book.title, "Dune");
    assert!(!loan.is_returned());
    assert!(loan.user.is_none());
}

#[test]
fn admin_loan_parses_borrower() {
    let raw = r#"{
        "id": "l2",
        "issuedAt": "2024-03-01T10:00:00Z",
        "returnedAt": "2024-03-05T09:30:00Z",
        "book": { "id": "b1", "title": "Dune" },
        "user": { "id": "u9", "name": "Ada", "email": "ada@example.com" }
    }"#;
    let loan: Loan = serde_json::from_str(raw).unwrap();
    assert!(loan.is_returned());
    assert_eq!(loan.user.unwrap().email, "ada@example.com");
    assert_eq!(loan.book.isbn, "");
}

#[test]
fn user_record_accepts_lowercase_role() {
    let raw = r#"{"id":"u1","name":"Ada","email":"a@b.com","role":"admin","createdAt":"2024-01-02T00:00:00Z"}"#;
    let user: UserRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(user.role(), Some(Role::Admin));
    assert_eq!(user.role_label(), "ADMIN");
    assert!(user.profile_image.is_none());
}

#[test]
fn user_list_tolerates_unrecognized_role() {
    let raw = r#"[
        {"id":"u1","name":"Ada","email":"a@b.com","role":"ADMIN"},
        {"id":"u2","name":"Lin","email":"l@b.com","role":"LIBRARIAN"}
    ]"#;
    let users: Vec<UserRecord> = serde_json::from_str(raw).unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].role(), None);
    assert_eq!(users[1].role_label(), "LIBRARIAN");
}

#[test]
fn auth_response_tolerates_missing_fields() {
    let response: AuthResponse = serde_json::from_str(r#"{"accessToken":"jwt"}"#).unwrap();
    assert_eq!(response.access_token.as_deref(), Some("jwt"));
    assert!(response.role.is_none());
}

#[test]
fn admin_stats_parse_chart_series() {
    let raw = r#"{
        "totalLoans": 10, "activeLoans": 4, "returnedLoans": 6, "overdueLoans": 1, "totalUsers": 7,
        "loanStatusChart": [{ "name": "Active", "value": 4 }],
        "loansOverTime": [{ "date": "2024-03-01", "count": 2 }]
    }"#;
    let stats: AdminStats = serde_json::from_str(raw).unwrap();
    assert_eq!(stats.total_users, 7);
    assert_eq!(stats.loan_status_chart[0].value, 4);
    assert_eq!(stats.loans_over_time[0].date, "2024-03-01");
}

#[test]
fn member_stats_default_empty_chart() {
    let raw = r#"{"myTotalLoans":3,"myActiveLoans":1,"myReturnedLoans":2,"myOverdueLoans":0}"#;
    let stats: MemberStats = serde_json::from_str(raw).unwrap();
    assert_eq!(stats.my_total_loans, 3);
    assert!(stats.my_loan_status_chart.is_empty());
}
