//! Client route surface
//!
//! Path patterns bound to at most one page identifier. Routes with no
//! identifier (login, not-found) are unguarded by role.

use crate::auth::permissions::Page;

/// What a resolved path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Unguarded login entry point
    Login,
    /// Unguarded not-found / forbidden view
    NotFound,
    /// Guarded feature view
    Page(Page),
}

/// A single path binding.
#[derive(Debug, Clone)]
pub struct Route {
    /// Path pattern
    pub path: &'static str,
    /// Resolution target
    pub kind: RouteKind,
}

/// Path → route binding table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// The portal's route surface.
    pub fn portal_defaults() -> Self {
        let routes = vec![
            Route {
                path: "/login",
                kind: RouteKind::Login,
            },
            Route {
                path: "/not-found",
                kind: RouteKind::NotFound,
            },
            Route {
                path: "/chat",
                kind: RouteKind::Page(Page::Chatbot),
            },
            Route {
                path: "/meetings",
                kind: RouteKind::Page(Page::Meetings),
            },
            Route {
                path: "/equipment",
                kind: RouteKind::Page(Page::Equipment),
            },
            Route {
                path: "/tickets",
                kind: RouteKind::Page(Page::Tickets),
            },
            Route {
                path: "/admin",
                kind: RouteKind::Page(Page::AdminOverview),
            },
            Route {
                path: "/admin/equipment-approval",
                kind: RouteKind::Page(Page::EquipmentApproval),
            },
            Route {
                path: "/superuser/audit-logs",
                kind: RouteKind::Page(Page::AuditLogs),
            },
            Route {
                path: "/superuser/users",
                kind: RouteKind::Page(Page::UserManagement),
            },
            Route {
                path: "/superuser/all-data",
                kind: RouteKind::Page(Page::AllSystemData),
            },
        ];
        Self { routes }
    }

    /// Resolve a path. Unknown paths fall back to the not-found view.
    pub fn resolve(&self, path: &str) -> RouteKind {
        let normalized = Self::normalize(path);
        self.routes
            .iter()
            .find(|route| route.path == normalized)
            .map(|route| route.kind)
            .unwrap_or(RouteKind::NotFound)
    }

    /// All configured routes.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Path bound to a page, if the page is routed.
    pub fn path_for(&self, page: Page) -> Option<&'static str> {
        self.routes
            .iter()
            .find(|route| route.kind == RouteKind::Page(page))
            .map(|route| route.path)
    }

    fn normalize(path: &str) -> String {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return "/".to_string();
        }
        if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        }
    }
}
