use super::*;

#[test]
fn email_shape_accepts_plain_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    for bad in ["", "a@b", "ab.com", "a @b.com", "a@@b.com", "@b.com"] {
        assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
}

#[test]
fn login_requires_both_fields() {
    assert_eq!(validate_login("", "secret"), Err(FILL_ALL_FIELDS));
    assert_eq!(validate_login("a@b.com", ""), Err(FILL_ALL_FIELDS));
    assert_eq!(validate_login("a@b.com", "secret"), Ok(()));
}

#[test]
fn registration_rules_apply_in_order() {
    assert_eq!(validate_registration("", "bad", "1", "2"), Err(FILL_ALL_FIELDS));
    assert_eq!(validate_registration("A", "bad", "1", "2"), Err("Name must be at least 2 characters"));
    assert_eq!(validate_registration("Al", "bad", "1", "2"), Err("Please enter a valid email address"));
    assert_eq!(validate_registration("Al", "a@b.com", "12345", "2"), Err("Password must be at least 6 characters"));
    assert_eq!(validate_registration("Al", "a@b.com", "123456", "654321"), Err("Passwords do not match"));
    assert_eq!(validate_registration("Al", "a@b.com", "123456", "123456"), Ok(()));
}

#[test]
fn book_form_requires_title_and_isbn() {
    assert_eq!(validate_book_form("  ", "978"), Err(FILL_REQUIRED_FIELDS));
    assert_eq!(validate_book_form("Dune", ""), Err(FILL_REQUIRED_FIELDS));
    assert_eq!(validate_book_form("Dune", "978"), Ok(()));
}

#[test]
fn quantity_parses_leniently() {
    assert_eq!(parse_quantity(" 4 "), 4);
    assert_eq!(parse_quantity(""), 0);
    assert_eq!(parse_quantity("many"), 0);
    assert_eq!(parse_quantity("-3"), 0);
}

#[test]
fn login_failures_are_reworded() {
    let unauthorized = ApiError::Status { status: 401, message: "Unauthorized".to_owned() };
    assert_eq!(login_failure_message(&unauthorized), "Invalid email or password");

    let bad_request = ApiError::Status { status: 400, message: "email must be an email".to_owned() };
    assert_eq!(login_failure_message(&bad_request), "Please check your email and password format");

    let other = ApiError::Status { status: 500, message: "Internal server error".to_owned() };
    assert_eq!(login_failure_message(&other), "Internal server error");

    assert_eq!(login_failure_message(&ApiError::Network), "Network error: Unable to connect to server");
}

#[test]
fn welcome_depends_on_reported_role() {
    assert_eq!(welcome_message(Some("admin")), "Welcome Admin!");
    assert_eq!(welcome_message(Some("MEMBER")), "Welcome Member!");
    assert_eq!(welcome_message(None), "Welcome Member!");
}
