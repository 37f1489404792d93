//! # IntelliDesk Portal Client
//!
//! Client library for the IntelliDesk internal helpdesk portal. It owns
//! the session lifecycle, the role-based permission table, the route
//! guards that keep views above a user's privilege unreachable, and the
//! bearer-authenticated API gateway the feature views call through.
//!
//! ## Features
//!
//! - **Role-gated routing**: three privilege tiers (`user`, `admin`,
//!   `superuser`) checked against a static, fail-closed permission table
//! - **Session lifecycle**: durable token/identity persistence with
//!   automatic restore on startup and forced logout on credential
//!   rejection
//! - **Single gateway chokepoint**: bearer attachment and 401 expiry
//!   interception in one place; feature wrappers never touch credentials
//! - **Typed endpoint wrappers**: chat, meetings, equipment, tickets, and
//!   admin/superuser views
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use intellidesk_client::{Navigation, Portal, PortalConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PortalConfig::builder()
//!         .base_url("https://intranet.example.com/api")
//!         .build();
//!     let portal = Portal::new(config)?;
//!
//!     let user = portal.api().login("alice", "secret").await?;
//!     println!("logged in as {} ({})", user.username, user.role);
//!
//!     match portal.navigate("/admin") {
//!         Navigation::Render(view) => println!("render {view:?}"),
//!         Navigation::Redirect { to, .. } => println!("bounced to {}", to.path()),
//!         Navigation::Pending => println!("still loading"),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod routing;
pub mod storage;

// Re-export main types
pub use api::ApiClient;
pub use auth::{AuthContext, AuthState, Page, PermissionTable, Role, Session, SessionStore, UserInfo};
pub use config::PortalConfig;
pub use error::{PortalError, Result};
pub use routing::{GuardDecision, Navigation, NavSection, RedirectTarget, RouteKind, RouteTable, Router};

use std::sync::Arc;
use storage::{FileStorage, MemoryStorage, SessionStorage};
use tracing::info;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize default logging for the portal client.
pub fn init() {
    tracing_subscriber::fmt::init();
}

/// Fully wired portal client.
///
/// Construction order is the process bootstrap: durable storage, session
/// store, auth context (with its one-shot session restore), permission
/// table, router, gateway client. Everything is explicitly owned here and
/// injected downward; there are no global singletons.
pub struct Portal {
    auth: Arc<AuthContext>,
    router: Router,
    api: ApiClient,
}

impl Portal {
    /// Wire up a portal client from configuration.
    pub fn new(config: PortalConfig) -> Result<Self> {
        info!(base_url = %config.base_url, "initializing portal client");

        let storage: Arc<dyn SessionStorage> = match &config.session_file {
            Some(path) => Arc::new(FileStorage::open(path)?),
            None => Arc::new(MemoryStorage::new()),
        };
        let store = SessionStore::new(storage);

        let auth = Arc::new(AuthContext::new(store));
        // resolve Loading before any guarded content can render
        auth.initialize();

        let router = Router::portal_defaults();
        let api = ApiClient::new(&config, auth.clone())?;

        Ok(Self { auth, router, api })
    }

    /// The session owner.
    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// The route guard layer.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The gateway client.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Resolve and guard a navigation against the current auth state.
    pub fn navigate(&self, path: &str) -> Navigation {
        self.router.navigate(&self.auth.state(), path)
    }

    /// Visible menu for the current role.
    pub fn menu(&self) -> Vec<NavSection> {
        routing::nav::menu_for(self.auth.role(), self.router.permissions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(NAME, env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn test_portal_bootstrap_resolves_loading() {
        let portal = Portal::new(PortalConfig::default()).unwrap();
        assert!(!portal.auth().is_loading());
        assert_eq!(portal.auth().state(), AuthState::Anonymous);
        // anonymous bootstrap: guarded navigation bounces to login
        assert_eq!(
            portal.navigate("/chat"),
            Navigation::Redirect {
                to: RedirectTarget::Login,
                replace: true
            }
        );
        assert!(portal.menu().is_empty());
    }
}
