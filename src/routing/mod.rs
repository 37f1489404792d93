//! Routing: route table, guards, and navigation menu
//!
//! The router binds the route surface to the permission table and applies
//! the guard per navigation, producing a side-effect-free [`Navigation`]
//! the embedding shell carries out.

pub mod guard;
pub mod nav;
pub mod routes;
#[cfg(test)]
mod tests;

// Re-export public types
pub use guard::{GuardDecision, RedirectTarget};
pub use nav::{NavItem, NavSection};
pub use routes::{Route, RouteKind, RouteTable};

use crate::auth::context::AuthState;
use crate::auth::permissions::PermissionTable;

/// Resolution of one navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Session read pending; render a neutral waiting state
    Pending,
    /// Render the resolved view
    Render(RouteKind),
    /// Navigate elsewhere instead
    Redirect {
        /// Destination
        to: RedirectTarget,
        /// Replace history so back-navigation cannot re-enter
        replace: bool,
    },
}

/// Applies route resolution and guarding per navigation.
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    permissions: PermissionTable,
}

impl Router {
    /// Bind a route table to a permission table.
    pub fn new(table: RouteTable, permissions: PermissionTable) -> Self {
        Self { table, permissions }
    }

    /// Router over the portal defaults.
    pub fn portal_defaults() -> Self {
        Self::new(RouteTable::portal_defaults(), PermissionTable::new())
    }

    /// Resolve `path` and apply the guard against the given auth state.
    ///
    /// Pure: call again after any auth state change, the decision is
    /// recomputed from scratch.
    pub fn navigate(&self, state: &AuthState, path: &str) -> Navigation {
        let kind = self.table.resolve(path);
        match guard::evaluate(state, kind, &self.permissions) {
            GuardDecision::Pending => Navigation::Pending,
            GuardDecision::Allow => Navigation::Render(kind),
            GuardDecision::Redirect(to) => Navigation::Redirect { to, replace: true },
        }
    }

    /// The bound route table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The bound permission table.
    pub fn permissions(&self) -> &PermissionTable {
        &self.permissions
    }
}
