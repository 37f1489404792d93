//! Authentication and authorization
//!
//! The portal's client-side authorization core: the closed role set, the
//! page permission table, the durable session store, and the session
//! lifecycle state machine consumed by route guards and the API gateway.

pub mod context;
pub mod permissions;
pub mod role;
pub mod session;

// Re-export commonly used types
pub use context::{AuthContext, AuthState};
pub use permissions::{Page, PermissionTable};
pub use role::Role;
pub use session::{Session, SessionStore, UserInfo};
