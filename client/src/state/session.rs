//! Session store: who is logged in, mirrored to `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` constructs one `SessionHandle`, provides it through Leptos context,
//! and hydrates it once on the client. Pages read the identity and bearer
//! token from it; only `login` and `logout` mutate it.
//!
//! LIFECYCLE
//! =========
//! `Uninitialized` -> `Anonymous` | `Authenticated`. Hydration runs exactly
//! once; login and logout move between the two hydrated phases. During SSR
//! the store stays `Uninitialized`, so guards wait instead of redirecting.
//!
//! FAILURE POLICY
//! ==============
//! Unreadable or malformed stored sessions take the anonymous fallback path:
//! a warning is logged and the store becomes hydrated-anonymous. Nothing
//! else is persisted client-side, so no other state depends on the session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use leptos::prelude::*;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Durable storage key holding the serialized identity.
pub const SESSION_KEY: &str = "user";

/// Uppercase a raw role string. Idempotent.
pub fn normalize_role(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Account role as granted by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    /// Parse a role in any letter case.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_role(raw).as_str() {
            "ADMIN" => Some(Self::Admin),
            "MEMBER" => Some(Self::Member),
            _ => None,
        }
    }

    /// Canonical uppercase form used on the wire and in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Member => "MEMBER",
        }
    }

    /// Label shown on profile badges.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Member => "Member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| D::Error::custom(format!("unknown role: {raw}")))
    }
}

/// The authenticated user and the bearer token for backend calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

impl Identity {
    /// Build an identity from untrusted parts, normalizing the role.
    ///
    /// Returns `None` when the role is neither `ADMIN` nor `MEMBER` in any case.
    pub fn from_parts(name: &str, email: &str, role: &str, token: &str) -> Option<Self> {
        Some(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            role: Role::parse(role)?,
            token: token.to_owned(),
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_member(&self) -> bool {
        self.role == Role::Member
    }
}

/// Key/value backing for the persisted session.
pub trait SessionStorage {
    /// Read a raw value; `None` when absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;
    /// Best-effort write.
    fn write(&self, key: &str, value: &str);
    /// Best-effort removal.
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Reads nothing and writes nothing outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.remove_item(key);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Where the store is in its lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Storage has not been read yet.
    #[default]
    Uninitialized,
    /// Storage was read and holds no usable identity.
    Anonymous,
    Authenticated(Identity),
}

/// Why hydration ended up anonymous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnonymousReason {
    NoStoredSession,
    Unparseable(String),
}

/// Session state machine, independent of Leptos so it can be driven directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    phase: SessionPhase,
}

impl Session {
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// `true` once hydration has run, whatever it found.
    pub fn is_ready(&self) -> bool {
        !matches!(self.phase, SessionPhase::Uninitialized)
    }

    pub fn current(&self) -> Option<&Identity> {
        match &self.phase {
            SessionPhase::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.current().map(|identity| identity.token.as_str())
    }

    /// Adopt the stored identity, if any. Runs once; later calls are ignored.
    pub fn hydrate(&mut self, storage: &impl SessionStorage) {
        if self.is_ready() {
            return;
        }
        let Some(raw) = storage.read(SESSION_KEY) else {
            self.anonymous_fallback(&AnonymousReason::NoStoredSession);
            return;
        };
        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => self.phase = SessionPhase::Authenticated(identity),
            Err(e) => self.anonymous_fallback(&AnonymousReason::Unparseable(e.to_string())),
        }
    }

    /// Treat the tab as logged out after a failed or empty hydration.
    ///
    /// The stored value is left untouched; the next login overwrites it.
    pub fn anonymous_fallback(&mut self, reason: &AnonymousReason) {
        if let AnonymousReason::Unparseable(detail) = reason {
            leptos::logging::warn!("stored session ignored: {detail}");
        }
        self.phase = SessionPhase::Anonymous;
    }

    /// Persist and adopt `identity`.
    pub fn login(&mut self, storage: &impl SessionStorage, identity: Identity) {
        match serde_json::to_string(&identity) {
            Ok(raw) => storage.write(SESSION_KEY, &raw),
            Err(e) => leptos::logging::warn!("session not persisted: {e}"),
        }
        self.phase = SessionPhase::Authenticated(identity);
    }

    /// Forget the identity in memory and in storage.
    pub fn logout(&mut self, storage: &impl SessionStorage) {
        storage.remove(SESSION_KEY);
        self.phase = SessionPhase::Anonymous;
    }
}

/// Reactive handle to the tab's session, shared through Leptos context.
#[derive(Clone, Copy, Debug)]
pub struct SessionHandle {
    state: RwSignal<Session>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self { state: RwSignal::new(Session::default()) }
    }

    /// Read the persisted session from `localStorage`. Call once at app start.
    pub fn init(self) {
        self.state.update(|s| s.hydrate(&BrowserStorage));
    }

    pub fn login(self, identity: Identity) {
        self.state.update(|s| s.login(&BrowserStorage, identity));
    }

    pub fn logout(self) {
        self.state.update(|s| s.logout(&BrowserStorage));
    }

    /// Tracked read of the current identity.
    pub fn current(self) -> Option<Identity> {
        self.state.with(|s| s.current().cloned())
    }

    /// Tracked read of the hydration flag.
    pub fn is_ready(self) -> bool {
        self.state.with(Session::is_ready)
    }

    /// Untracked token read for event handlers.
    pub fn token(self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_owned))
    }

    /// Tracked snapshot of the whole session, for guards.
    pub fn snapshot(self) -> Session {
        self.state.get()
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// The session provided by `App`. Panics outside the provider.
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}
