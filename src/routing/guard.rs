//! Route guards
//!
//! Two independently composable checks, applied in order: authentication,
//! then role. Decisions are pure functions of (state, route, table) and
//! carry no side effects; the navigation layer consumes them. Guards are
//! re-evaluated on every navigation and on every auth state change.

use crate::auth::context::AuthState;
use crate::auth::permissions::{Page, PermissionTable};
use crate::routing::routes::RouteKind;

/// Redirect destination produced by a guard bounce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Login entry point
    Login,
    /// Not-found / forbidden view
    NotFound,
}

impl RedirectTarget {
    /// Path of the destination.
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Login => "/login",
            RedirectTarget::NotFound => "/not-found",
        }
    }
}

/// Outcome of evaluating a guard for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session read still pending; show a neutral waiting state, never a
    /// redirect.
    Pending,
    /// Render the requested view.
    Allow,
    /// Bounce. Redirects replace history so back-navigation cannot
    /// re-enter the bounced page.
    Redirect(RedirectTarget),
}

/// Authentication check: suspend while loading, bounce anonymous traffic
/// to login.
pub fn require_auth(state: &AuthState) -> GuardDecision {
    match state {
        AuthState::Loading => GuardDecision::Pending,
        AuthState::Anonymous => GuardDecision::Redirect(RedirectTarget::Login),
        AuthState::Authenticated(_) => GuardDecision::Allow,
    }
}

/// Role check for a single guarded page, composed after the
/// authentication check.
pub fn require_role(state: &AuthState, page: Page, table: &PermissionTable) -> GuardDecision {
    match require_auth(state) {
        GuardDecision::Allow => {}
        other => return other,
    }
    if table.allows(state.role(), page) {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(RedirectTarget::NotFound)
    }
}

/// Full guard for a resolved route. Unguarded routes always render.
pub fn evaluate(state: &AuthState, route: RouteKind, table: &PermissionTable) -> GuardDecision {
    match route {
        RouteKind::Login | RouteKind::NotFound => GuardDecision::Allow,
        RouteKind::Page(page) => require_role(state, page, table),
    }
}
