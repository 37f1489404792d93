//! Session persistence
//!
//! The durable mirror of the authenticated identity: an opaque bearer
//! credential under `token` and the JSON-encoded identity under `user`.
//! Both present and decodable means a session; anything else means none.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::auth::role::Role;
use crate::error::Result;
use crate::storage::SessionStorage;

/// Storage key for the bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-encoded identity.
pub const USER_KEY: &str = "user";

/// Authenticated identity as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Server-side user id
    pub id: String,
    /// Login name
    pub username: String,
    /// Privilege tier
    pub role: Role,
}

/// Bearer credential paired with the identity it represents.
///
/// Invariant: token and user are set together or not at all; there is no
/// partial session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer credential
    pub token: String,
    /// Authenticated identity
    pub user: UserInfo,
}

/// Reads and writes the durable session slot.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    /// Wrap a storage backend.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Reconstruct the persisted session, if any.
    ///
    /// A missing credential, a missing identity, or an identity that does
    /// not deserialize all read as "no session"; storage is left untouched
    /// and the portal degrades to requiring re-authentication.
    pub fn load(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY)?;
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str::<UserInfo>(&raw) {
            Ok(user) => Some(Session { token, user }),
            Err(err) => {
                warn!(%err, "stored identity is malformed, treating as no session");
                None
            }
        }
    }

    /// Persist a session, overwriting any prior one.
    pub fn save(&self, session: &Session) -> Result<()> {
        let raw = serde_json::to_string(&session.user)?;
        // identity first, credential last: a load between the two writes
        // reads a missing token and resolves to no session, never to a
        // credential without its identity
        self.storage.set(USER_KEY, &raw)?;
        self.storage.set(TOKEN_KEY, &session.token)?;
        Ok(())
    }

    /// Remove all durable session data. Idempotent.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)?;
        Ok(())
    }
}
