//! Concurrent store of live sessions.
//!
//! [`SessionRegistry`] keeps every connection the engine currently
//! considers live in a `HashMap` behind a [`tokio::sync::RwLock`]. The one
//! rule that matters: the lock is never held across a send. Broadcasts take
//! a [`SessionRegistry::snapshot`] copy first and iterate that, so delivery
//! duration never extends the lock's hold time.

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::{Session, SessionId};

/// Thread-safe set of active sessions, keyed by [`SessionId`].
///
/// # Concurrency
///
/// - `add`, `remove`, and `snapshot` are mutually exclusive with respect
///   to writes; concurrent calls from different connection tasks are safe
///   without external synchronization.
/// - Connection-lifecycle races (duplicate connect, double close) are
///   expected, so `add` and `remove` are idempotent no-ops rather than
///   errors.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a session, keyed by its identifier.
    ///
    /// A no-op if a session with the same identifier is already present;
    /// the first registration wins.
    pub async fn add(&self, session: Session) {
        let mut map = self.sessions.write().await;
        map.entry(session.id()).or_insert(session);
    }

    /// Removes the session with the given identifier.
    ///
    /// A no-op if the identifier is absent, which handles double-close
    /// races without treating them as failures.
    pub async fn remove(&self, id: SessionId) {
        let mut map = self.sessions.write().await;
        map.remove(&id);
    }

    /// Returns a point-in-time copy of all current members.
    ///
    /// Safe to iterate while other tasks add or remove sessions; ordering
    /// among the returned sessions is unspecified.
    pub async fn snapshot(&self) -> Vec<Session> {
        let map = self.sessions.read().await;
        map.values().cloned().collect()
    }

    /// Returns `true` if a session with the given identifier is present.
    pub async fn contains(&self, id: SessionId) -> bool {
        self.sessions.read().await.contains_key(&id)
    }

    /// Returns the number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns `true` if no sessions are registered.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
