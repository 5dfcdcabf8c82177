//! # Session
//!
//! The visitor's session is two opaque entries in persistent key/value
//! storage: the bearer token and the id of the last document submission.
//! Every read goes back to storage, so a value written by another tab is
//! picked up on the next gated action.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

/// Storage key of the bearer token.
pub const AUTH_TOKEN_KEY: &str = "bcb-auth-token";
/// Storage key of the last submission id.
pub const SUBMISSION_ID_KEY: &str = "bcb-submission-id";
/// Storage key of the serialized chat transcript.
pub const CHAT_HISTORY_KEY: &str = "bcb-chat-history";

/// Minimal string key/value storage, e.g. the browser's `localStorage`.
///
/// Writes are fire-and-forget: implementations log failures (quota exceeded,
/// storage disabled) instead of reporting them.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Delete `key`.
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// In-memory [`KeyValueStore`]; clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Point-in-time copy of the persisted session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Bearer token, present once the visitor logged in.
    pub auth_token: Option<String>,
    /// Submission id, present once documents were accepted.
    pub submission_id: Option<i64>,
}

impl Session {
    /// A stored token counts as logged in; it is never validated locally.
    pub const fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    /// First ten characters of the token followed by an ellipsis.
    pub fn token_preview(&self) -> Option<String> {
        self.auth_token
            .as_deref()
            .map(|token| format!("{}...", token.chars().take(10).collect::<String>()))
    }
}

/// Session operations over a [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Wrap `store`.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying storage.
    pub const fn storage(&self) -> &S {
        &self.store
    }

    /// Stored bearer token; an empty string reads as absent.
    pub fn token(&self) -> Option<String> {
        self.store
            .get(AUTH_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    /// Persist `token` as the bearer credential.
    pub fn set_token(&self, token: &str) {
        debug!("storing auth token");
        self.store.set(AUTH_TOKEN_KEY, token);
    }

    /// Forget the bearer token.
    pub fn clear_token(&self) {
        debug!("clearing auth token");
        self.store.remove(AUTH_TOKEN_KEY);
    }

    /// Stored submission id; a value that is not an integer reads as absent.
    pub fn submission_id(&self) -> Option<i64> {
        self.store
            .get(SUBMISSION_ID_KEY)
            .and_then(|raw| raw.trim().parse().ok())
    }

    /// Persist the id returned by a successful submission.
    pub fn set_submission_id(&self, id: i64) {
        debug!(submission_id = id, "storing submission id");
        self.store.set(SUBMISSION_ID_KEY, &id.to_string());
    }

    /// Current persisted state.
    pub fn snapshot(&self) -> Session {
        Session {
            auth_token: self.token(),
            submission_id: self.submission_id(),
        }
    }

    /// Logout: drop the token. The submission id survives so a visitor can
    /// log back in and still book.
    pub fn sign_out(&self) {
        self.clear_token();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let session = SessionStore::new(MemoryStore::new());
        assert_eq!(session.token(), None);

        session.set_token("abc123");
        assert_eq!(session.token().as_deref(), Some("abc123"));

        session.clear_token();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_token_is_stored_raw() {
        let store = MemoryStore::new();
        SessionStore::new(&store).set_token("tok-1");

        assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_empty_token_reads_as_absent() {
        let store = MemoryStore::new();
        store.set(AUTH_TOKEN_KEY, "");

        assert!(!SessionStore::new(&store).snapshot().is_authenticated());
    }

    #[test]
    fn test_submission_id_round_trip() {
        let session = SessionStore::new(MemoryStore::new());
        session.set_submission_id(42);

        assert_eq!(session.submission_id(), Some(42));
        assert_eq!(session.storage().get(SUBMISSION_ID_KEY).as_deref(), Some("42"));
    }

    #[test]
    fn test_garbage_submission_id_reads_as_absent() {
        let store = MemoryStore::new();
        store.set(SUBMISSION_ID_KEY, "not-a-number");

        assert_eq!(SessionStore::new(&store).submission_id(), None);
    }

    #[test]
    fn test_sign_out_keeps_submission() {
        let session = SessionStore::new(MemoryStore::new());
        session.set_token("abc");
        session.set_submission_id(5);

        session.sign_out();

        assert_eq!(
            session.snapshot(),
            Session {
                auth_token: None,
                submission_id: Some(5),
            }
        );
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v");

        assert_eq!(other.get("k").as_deref(), Some("v"));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_token_preview() {
        let session = Session {
            auth_token: Some("0123456789abcdef".into()),
            submission_id: None,
        };
        assert_eq!(session.token_preview().as_deref(), Some("0123456789..."));
        assert_eq!(Session::default().token_preview(), None);
    }
}
