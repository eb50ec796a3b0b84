//! Session Identity
//!
//! Anonymous visitors are identified by a random key kept in their session
//! state. The key is created lazily, the first time the cart is touched.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use uuid::Uuid;

/// Session entry holding the visitor's cart key.
pub const CART_KEY: &str = "cart_key";

/// Key/value session state for a single visitor.
pub trait SessionState {
    /// Read a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one.
    fn insert(&mut self, key: &str, value: String);
}

/// Per-visitor cart identifier.
///
/// Backed by a random (v4) UUID. The canonical string form is the hyphenated,
/// lowercase UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionKey(Uuid);

impl SessionKey {
    /// Generate a fresh random key.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }

    /// Return the session's cart key, creating and storing one if it has none.
    ///
    /// A stored value that does not parse as a key is replaced.
    pub fn resolve<S>(session: &mut S) -> Self
    where
        S: SessionState + ?Sized,
    {
        if let Some(key) = session.get(CART_KEY).and_then(|value| value.parse().ok()) {
            return key;
        }

        let key = Self::generate();

        session.insert(CART_KEY, key.to_string());

        key
    }
}

impl Display for SessionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for SessionKey {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(value).map(Self)
    }
}

impl From<Uuid> for SessionKey {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;
    use uuid::Version;

    use super::*;

    #[derive(Debug, Default)]
    struct MemorySession {
        values: FxHashMap<String, String>,
        writes: usize,
    }

    impl SessionState for MemorySession {
        fn get(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn insert(&mut self, key: &str, value: String) {
            self.writes += 1;
            self.values.insert(key.to_string(), value);
        }
    }

    #[test]
    fn resolve_is_stable_within_a_session() {
        let mut session = MemorySession::default();

        let first = SessionKey::resolve(&mut session);
        let second = SessionKey::resolve(&mut session);

        assert_eq!(first, second);
        assert_eq!(session.writes, 1, "only the first call should write");
    }

    #[test]
    fn resolve_differs_between_sessions() {
        let a = SessionKey::resolve(&mut MemorySession::default());
        let b = SessionKey::resolve(&mut MemorySession::default());

        assert_ne!(a, b);
    }

    #[test]
    fn resolve_returns_existing_key_unchanged() {
        let existing = "6f9619ff-8b86-4011-b42d-00cf4fc964ff";
        let mut session = MemorySession::default();

        session.insert(CART_KEY, existing.to_string());

        let key = SessionKey::resolve(&mut session);

        assert_eq!(key.to_string(), existing);
        assert_eq!(session.writes, 1);
    }

    #[test]
    fn resolve_replaces_unparseable_key() {
        let mut session = MemorySession::default();

        session.insert(CART_KEY, "not-a-key".to_string());

        let key = SessionKey::resolve(&mut session);

        assert_eq!(session.get(CART_KEY), Some(key.to_string()));
    }

    #[test]
    fn generated_keys_are_random_uuids() {
        let key = SessionKey::generate();

        assert_eq!(key.into_uuid().get_version(), Some(Version::Random));
        assert_eq!(key.to_string().len(), 36);
    }
}
