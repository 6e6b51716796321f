use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    fn with_raw(raw: &str) -> Self {
        let storage = Self::default();
        storage.write(SESSION_KEY, raw);
        storage
    }

    fn raw(&self) -> Option<String> {
        self.items.borrow().get(SESSION_KEY).cloned()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

fn member() -> Identity {
    Identity::from_parts("Ada", "a@b.com", "member", "tok-1").unwrap()
}

fn admin() -> Identity {
    Identity::from_parts("Root", "admin@library.com", "Admin", "tok-2").unwrap()
}

// =============================================================
// Role normalization
// =============================================================

#[test]
fn normalize_role_uppercases_and_trims() {
    assert_eq!(normalize_role(" member "), "MEMBER");
    assert_eq!(normalize_role("aDmIn"), "ADMIN");
}

#[test]
fn normalize_role_is_idempotent() {
    for raw in ["member", "MEMBER", "Admin", "ADMIN", "librarian"] {
        let once = normalize_role(raw);
        assert_eq!(normalize_role(&once), once);
    }
}

#[test]
fn role_parse_rejects_unknown_roles() {
    assert_eq!(Role::parse("member"), Some(Role::Member));
    assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    assert_eq!(Role::parse("librarian"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Role::Member).unwrap(), "\"MEMBER\"");
    let parsed: Role = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(parsed, Role::Admin);
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn default_session_is_not_ready() {
    let session = Session::default();
    assert!(!session.is_ready());
    assert!(session.current().is_none());
    assert_eq!(session.phase(), &SessionPhase::Uninitialized);
}

#[test]
fn hydrate_without_stored_session_is_ready_and_anonymous() {
    let storage = MemoryStorage::default();
    let mut session = Session::default();
    session.hydrate(&storage);
    assert!(session.is_ready());
    assert_eq!(session.phase(), &SessionPhase::Anonymous);
}

#[test]
fn hydrate_uppercases_stored_role() {
    let storage = MemoryStorage::with_raw(r#"{"name":"Ada","email":"a@b.com","role":"member","token":"t"}"#);
    let mut session = Session::default();
    session.hydrate(&storage);
    let identity = session.current().unwrap();
    assert_eq!(identity.role, Role::Member);
    assert_eq!(identity.role.as_str(), "MEMBER");
}

#[test]
fn hydrate_defaults_missing_name() {
    let storage = MemoryStorage::with_raw(r#"{"email":"a@b.com","role":"MEMBER","token":"t"}"#);
    let mut session = Session::default();
    session.hydrate(&storage);
    assert_eq!(session.current().unwrap().name, "");
}

#[test]
fn hydrate_corrupt_json_falls_back_to_anonymous() {
    let storage = MemoryStorage::with_raw("{not json");
    let mut session = Session::default();
    session.hydrate(&storage);
    assert!(session.is_ready());
    assert!(session.current().is_none());
}

#[test]
fn hydrate_unknown_role_falls_back_to_anonymous() {
    let storage = MemoryStorage::with_raw(r#"{"name":"x","email":"x@y.z","role":"owner","token":"t"}"#);
    let mut session = Session::default();
    session.hydrate(&storage);
    assert_eq!(session.phase(), &SessionPhase::Anonymous);
}

#[test]
fn hydrate_runs_only_once() {
    let storage = MemoryStorage::default();
    let mut session = Session::default();
    session.hydrate(&storage);

    storage.write(SESSION_KEY, &serde_json::to_string(&member()).unwrap());
    session.hydrate(&storage);
    assert!(session.current().is_none());
}

#[test]
fn anonymous_fallback_keeps_stored_value() {
    let storage = MemoryStorage::with_raw("garbage");
    let mut session = Session::default();
    session.hydrate(&storage);
    assert_eq!(storage.raw().as_deref(), Some("garbage"));
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_member_stores_uppercase_role() {
    let storage = MemoryStorage::default();
    let mut session = Session::default();
    session.hydrate(&storage);
    session.login(&storage, Identity::from_parts("", "a@b.com", "member", "tok").unwrap());

    assert_eq!(session.current().unwrap().role.as_str(), "MEMBER");
    let stored: serde_json::Value = serde_json::from_str(&storage.raw().unwrap()).unwrap();
    assert_eq!(stored["role"], "MEMBER");
    assert_eq!(stored["email"], "a@b.com");
    assert_eq!(stored["token"], "tok");
}

#[test]
fn hydrate_after_login_restores_identity() {
    let storage = MemoryStorage::default();
    for identity in [member(), admin()] {
        let mut first_tab = Session::default();
        first_tab.hydrate(&storage);
        first_tab.login(&storage, identity.clone());

        let mut restarted = Session::default();
        restarted.hydrate(&storage);
        assert_eq!(restarted.current(), Some(&identity));
    }
}

#[test]
fn login_overwrites_previous_identity() {
    let storage = MemoryStorage::default();
    let mut session = Session::default();
    session.login(&storage, member());
    session.login(&storage, admin());

    let mut restarted = Session::default();
    restarted.hydrate(&storage);
    assert!(restarted.current().unwrap().is_admin());
}

#[test]
fn logout_clears_identity_and_storage() {
    let storage = MemoryStorage::default();
    let mut session = Session::default();
    session.login(&storage, member());
    session.logout(&storage);

    assert!(session.current().is_none());
    assert!(session.is_ready());
    assert!(storage.raw().is_none());
}

#[test]
fn logout_from_any_phase_yields_none() {
    let storage = MemoryStorage::default();

    let mut fresh = Session::default();
    fresh.logout(&storage);
    assert!(fresh.current().is_none());

    let mut anonymous = Session::default();
    anonymous.hydrate(&storage);
    anonymous.logout(&storage);
    assert!(anonymous.current().is_none());

    let mut authenticated = Session::default();
    authenticated.login(&storage, admin());
    authenticated.logout(&storage);
    assert!(authenticated.current().is_none());
}

#[test]
fn token_reflects_current_identity() {
    let storage = MemoryStorage::default();
    let mut session = Session::default();
    assert!(session.token().is_none());
    session.login(&storage, member());
    assert_eq!(session.token(), Some("tok-1"));
}

// =============================================================
// SessionHandle
// =============================================================

#[test]
fn handle_login_is_observed_synchronously() {
    let handle = SessionHandle::new();
    handle.init();
    assert!(handle.is_ready());
    assert!(handle.current().is_none());

    handle.login(member());
    assert_eq!(handle.current(), Some(member()));
    assert_eq!(handle.token().as_deref(), Some("tok-1"));

    handle.logout();
    assert!(handle.current().is_none());
}
