//! Online sessions, shared by every connection task.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

use crate::worker::SessionHandle;

/// Players currently connected through the bridge, keyed by Bedrock address.
///
/// Lookups take the read lock and may run from any session; connects and
/// disconnects take the write lock.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<SocketAddr, SessionHandle>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a connected session. Returns the handle it replaced, if the
    /// address was already in use.
    pub fn insert(&self, handle: SessionHandle) -> Option<SessionHandle> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        sessions.insert(handle.identity().address, handle)
    }

    pub fn remove(&self, address: &SocketAddr) -> Option<SessionHandle> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        sessions.remove(address)
    }

    /// Remove `handle` unless its address has since been taken over by a
    /// newer session.
    pub fn remove_handle(&self, handle: &SessionHandle) -> bool {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let address = handle.identity().address;
        match sessions.get(&address) {
            Some(current) if current.same_session(handle) => {
                sessions.remove(&address);
                true
            }
            _ => false,
        }
    }

    /// First session matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&SessionHandle) -> bool) -> Option<SessionHandle> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        sessions.values().find(|handle| predicate(handle)).cloned()
    }

    pub fn by_java_username(&self, name: &str) -> Option<SessionHandle> {
        self.find(|handle| handle.identity().java_username.eq_ignore_ascii_case(name))
    }

    pub fn by_java_uuid(&self, uuid: Uuid) -> Option<SessionHandle> {
        self.find(|handle| handle.identity().java_uuid == uuid)
    }

    /// A Java login for a profile that one of our sessions already
    /// authenticated needs no second online-mode check. The profile name must
    /// match that session's Java username exactly.
    pub fn should_skip_verification(&self, uuid: Uuid, name: &str) -> bool {
        self.by_java_uuid(uuid)
            .is_some_and(|handle| handle.identity().java_username == name)
    }

    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every online session.
    pub fn all(&self) -> Vec<SessionHandle> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        sessions.values().cloned().collect()
    }
}
