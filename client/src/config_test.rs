use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let config = ApiConfig::new("https://api.example.com///");
    assert_eq!(config.base_url(), "https://api.example.com");
}

#[test]
fn endpoint_joins_rooted_path() {
    let config = ApiConfig::new("https://api.example.com/");
    assert_eq!(config.endpoint("/books/7"), "https://api.example.com/books/7");
}

#[test]
fn endpoint_inserts_missing_separator() {
    let config = ApiConfig::new("http://localhost:4000");
    assert_eq!(config.endpoint("loans/active"), "http://localhost:4000/loans/active");
}

#[test]
fn empty_base_url_yields_relative_paths() {
    let config = ApiConfig::new("   ");
    assert_eq!(config.endpoint("/auth/login"), "/auth/login");
}
