//! Session lifecycle state machine
//!
//! Process-wide owner of the current session. Constructed explicitly and
//! injected into guards and the request gateway; there is no hidden global
//! singleton. State changes are published on a watch channel so every
//! dependent re-evaluates on login, logout, and server-side invalidation.

use tokio::sync::watch;
use tracing::{info, warn};

use crate::auth::role::Role;
use crate::auth::session::{Session, SessionStore, UserInfo};
use crate::error::Result;

/// Current authentication state of the portal process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Durable session read still pending; guards must suspend, not
    /// redirect.
    Loading,
    /// A session is active.
    Authenticated(Session),
    /// No session.
    Anonymous,
}

impl AuthState {
    /// Role of the active session; `None` while loading or anonymous.
    pub fn role(&self) -> Option<Role> {
        match self {
            AuthState::Authenticated(session) => Some(session.user.role),
            _ => None,
        }
    }

    /// Whether the initial session read is still pending.
    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }
}

/// Owner of the in-memory session and its lifecycle.
pub struct AuthContext {
    store: SessionStore,
    state: watch::Sender<AuthState>,
}

impl AuthContext {
    /// Create the context in the `Loading` state.
    pub fn new(store: SessionStore) -> Self {
        let (state, _) = watch::channel(AuthState::Loading);
        Self { store, state }
    }

    /// One-shot durable load, resolving `Loading` before any guarded
    /// content is permitted to render.
    pub fn initialize(&self) {
        let next = match self.store.load() {
            Some(session) => {
                info!(
                    username = %session.user.username,
                    role = %session.user.role,
                    "restored persisted session"
                );
                AuthState::Authenticated(session)
            }
            None => AuthState::Anonymous,
        };
        self.state.send_replace(next);
    }

    /// Install a session after a successful credential exchange.
    ///
    /// Persists first; a storage failure leaves the state unchanged so a
    /// partial session is never observable.
    pub fn login(&self, user: UserInfo, token: String) -> Result<()> {
        let session = Session { token, user };
        self.store.save(&session)?;
        info!(
            username = %session.user.username,
            role = %session.user.role,
            "user logged in"
        );
        self.state.send_replace(AuthState::Authenticated(session));
        Ok(())
    }

    /// Voluntary logout: clear durable storage and go anonymous.
    ///
    /// The navigation layer observes the transition and performs the full
    /// redirect to the login entry point; no view state for the previous
    /// identity survives it.
    pub fn logout(&self) {
        if let Err(err) = self.store.clear() {
            warn!(%err, "failed to clear session storage on logout");
        }
        info!("user logged out");
        self.state.send_replace(AuthState::Anonymous);
    }

    /// Server rejected the credential: identical to a logout from this
    /// point forward. Invoked by the gateway interceptor; always
    /// transitions, even if the storage write fails.
    pub fn invalidate(&self) {
        if let Err(err) = self.store.clear() {
            warn!(%err, "failed to clear rejected session from storage");
        }
        warn!("session invalidated by the server");
        self.state.send_replace(AuthState::Anonymous);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Role of the active session; `None` while loading or anonymous.
    pub fn role(&self) -> Option<Role> {
        self.state.borrow().role()
    }

    /// Bearer credential of the active session, if any.
    pub fn token(&self) -> Option<String> {
        match &*self.state.borrow() {
            AuthState::Authenticated(session) => Some(session.token.clone()),
            _ => None,
        }
    }

    /// Whether the initial session read is still pending.
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Receiver signalled on every state change.
    ///
    /// An `Anonymous` received here is authoritative even if locally
    /// derived role state looked valid moments before; a response handler
    /// firing after the session was cleared must not reintroduce one.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }
}
