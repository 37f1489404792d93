//! Tests for routing, guards, and the navigation menu

#[cfg(test)]
mod tests {
    use crate::auth::context::AuthState;
    use crate::auth::permissions::{Page, PermissionTable};
    use crate::auth::role::Role;
    use crate::auth::session::{Session, UserInfo};
    use crate::routing::guard::{self, GuardDecision, RedirectTarget};
    use crate::routing::nav::menu_for;
    use crate::routing::routes::{RouteKind, RouteTable};
    use crate::routing::{Navigation, Router};

    fn authenticated(role: Role) -> AuthState {
        AuthState::Authenticated(Session {
            token: "tok".to_string(),
            user: UserInfo {
                id: "u-1".to_string(),
                username: "alice".to_string(),
                role,
            },
        })
    }

    #[test]
    fn test_route_resolution() {
        let table = RouteTable::portal_defaults();
        assert_eq!(table.resolve("/login"), RouteKind::Login);
        assert_eq!(table.resolve("/chat"), RouteKind::Page(Page::Chatbot));
        assert_eq!(
            table.resolve("/admin/equipment-approval"),
            RouteKind::Page(Page::EquipmentApproval)
        );
        assert_eq!(
            table.resolve("/superuser/audit-logs"),
            RouteKind::Page(Page::AuditLogs)
        );
    }

    #[test]
    fn test_wildcard_falls_back_to_not_found() {
        let table = RouteTable::portal_defaults();
        assert_eq!(table.resolve("/does-not-exist"), RouteKind::NotFound);
        assert_eq!(table.resolve("/"), RouteKind::NotFound);
        assert_eq!(table.resolve(""), RouteKind::NotFound);
    }

    #[test]
    fn test_path_normalization() {
        let table = RouteTable::portal_defaults();
        assert_eq!(table.resolve("/meetings/"), RouteKind::Page(Page::Meetings));
        assert_eq!(table.resolve("meetings"), RouteKind::Page(Page::Meetings));
    }

    #[test]
    fn test_every_page_is_routed() {
        let table = RouteTable::portal_defaults();
        for page in Page::ALL {
            assert!(table.path_for(page).is_some(), "{page:?} has no route");
        }
    }

    #[test]
    fn test_guard_suspends_while_loading() {
        let table = PermissionTable::new();
        // never a redirect target before loading completes
        for page in Page::ALL {
            assert_eq!(
                guard::require_role(&AuthState::Loading, page, &table),
                GuardDecision::Pending
            );
        }
    }

    #[test]
    fn test_guard_bounces_anonymous_to_login() {
        let table = PermissionTable::new();
        assert_eq!(
            guard::require_role(&AuthState::Anonymous, Page::Chatbot, &table),
            GuardDecision::Redirect(RedirectTarget::Login)
        );
    }

    #[test]
    fn test_user_bounced_from_admin_overview() {
        let table = PermissionTable::new();
        assert_eq!(
            guard::require_role(&authenticated(Role::User), Page::AdminOverview, &table),
            GuardDecision::Redirect(RedirectTarget::NotFound)
        );
    }

    #[test]
    fn test_superuser_allowed_on_audit_logs() {
        let table = PermissionTable::new();
        assert_eq!(
            guard::require_role(&authenticated(Role::Superuser), Page::AuditLogs, &table),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_auth_check_runs_before_role_check() {
        // anonymous traffic on an admin page goes to login, not not-found
        let table = PermissionTable::new();
        assert_eq!(
            guard::require_role(&AuthState::Anonymous, Page::AdminOverview, &table),
            GuardDecision::Redirect(RedirectTarget::Login)
        );
    }

    #[test]
    fn test_unguarded_routes_always_render() {
        let table = PermissionTable::new();
        for state in [AuthState::Loading, AuthState::Anonymous] {
            assert_eq!(
                guard::evaluate(&state, RouteKind::Login, &table),
                GuardDecision::Allow
            );
            assert_eq!(
                guard::evaluate(&state, RouteKind::NotFound, &table),
                GuardDecision::Allow
            );
        }
    }

    #[test]
    fn test_router_redirects_replace_history() {
        let router = Router::portal_defaults();
        match router.navigate(&AuthState::Anonymous, "/tickets") {
            Navigation::Redirect { to, replace } => {
                assert_eq!(to, RedirectTarget::Login);
                assert!(replace);
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_router_recomputes_after_state_change() {
        let router = Router::portal_defaults();
        let path = "/admin";

        assert_eq!(router.navigate(&AuthState::Loading, path), Navigation::Pending);
        assert_eq!(
            router.navigate(&authenticated(Role::Admin), path),
            Navigation::Render(RouteKind::Page(Page::AdminOverview))
        );
        // a session expiring mid-session re-triggers the auth check on the
        // next navigation
        assert_eq!(
            router.navigate(&AuthState::Anonymous, path),
            Navigation::Redirect {
                to: RedirectTarget::Login,
                replace: true
            }
        );
    }

    #[test]
    fn test_menu_matches_guard_for_every_role() {
        let table = PermissionTable::new();
        for role in Role::ALL {
            for section in menu_for(Some(role), &table) {
                for item in section.items {
                    assert_eq!(
                        guard::require_role(&authenticated(role), item.page, &table),
                        GuardDecision::Allow,
                        "menu links to a route the guard would bounce: {:?}",
                        item.page
                    );
                }
            }
        }
    }

    #[test]
    fn test_menu_sections_per_role() {
        let table = PermissionTable::new();

        let user_menu = menu_for(Some(Role::User), &table);
        assert_eq!(user_menu.len(), 1);
        assert_eq!(user_menu[0].items.len(), 4);

        let admin_menu = menu_for(Some(Role::Admin), &table);
        assert_eq!(admin_menu.len(), 2);
        assert_eq!(admin_menu[1].title, Some("Admin"));

        let superuser_menu = menu_for(Some(Role::Superuser), &table);
        assert_eq!(superuser_menu.len(), 3);
        assert_eq!(superuser_menu[2].title, Some("Superuser"));
        assert_eq!(superuser_menu[2].items.len(), 3);
    }

    #[test]
    fn test_menu_empty_without_role() {
        let table = PermissionTable::new();
        assert!(menu_for(None, &table).is_empty());
    }

    #[test]
    fn test_menu_paths_resolve_to_their_pages() {
        let table = PermissionTable::new();
        let routes = RouteTable::portal_defaults();
        for section in menu_for(Some(Role::Superuser), &table) {
            for item in section.items {
                assert_eq!(routes.resolve(item.path), RouteKind::Page(item.page));
            }
        }
    }
}
