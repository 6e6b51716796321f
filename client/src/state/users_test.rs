use super::*;

fn user(id: &str, name: &str, email: &str, role: Role) -> UserRecord {
    UserRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        raw_role: role.as_str().to_owned(),
        created_at: None,
        profile_image: None,
    }
}

fn directory() -> Vec<UserRecord> {
    vec![
        user("1", "Ada Lovelace", "ada@lib.org", Role::Admin),
        user("2", "Bob Stone", "bob@lib.org", Role::Member),
        user("3", "Carol Reed", "carol@mail.com", Role::Member),
    ]
}

fn ids(users: &[UserRecord]) -> Vec<&str> {
    users.iter().map(|u| u.id.as_str()).collect()
}

#[test]
fn stats_count_roles() {
    assert_eq!(UserStats::from_users(&directory()), UserStats { total: 3, admins: 1, members: 2 });
}

#[test]
fn stats_of_empty_directory_are_zero() {
    assert_eq!(UserStats::from_users(&[]), UserStats::default());
}

#[test]
fn blank_query_returns_everyone_in_order() {
    let users = directory();
    assert_eq!(ids(&search_users(&users, "   ")), ["1", "2", "3"]);
}

#[test]
fn unrecognized_role_is_not_counted_as_admin() {
    let mut users = directory();
    let librarian = UserRecord { raw_role: "LIBRARIAN".to_owned(), ..user("4", "Dan Moss", "dan@lib.org", Role::Member) };
    users.push(librarian);
    assert_eq!(UserStats::from_users(&users), UserStats { total: 4, admins: 1, members: 3 });
}

#[test]
fn query_matches_email() {
    let users = directory();
    assert_eq!(ids(&search_users(&users, "mail.com")), ["3"]);
}

#[test]
fn query_matches_name_case_insensitively() {
    let users = directory();
    assert_eq!(ids(&search_users(&users, "STONE")), ["2"]);
}

#[test]
fn query_with_no_match_is_empty() {
    let users = directory();
    assert!(search_users(&users, "zzzz").is_empty());
}
