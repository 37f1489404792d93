//! Navigation menu
//!
//! Derives the visible sidebar from role and permission table. Every
//! emitted item passes the same table the route guard consults, so the
//! menu never links to a route the guard would bounce.

use crate::auth::permissions::{Page, PermissionTable};
use crate::auth::role::Role;

/// A single menu link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Display label
    pub label: &'static str,
    /// Navigation path
    pub path: &'static str,
    /// Guarded page the link leads to
    pub page: Page,
}

/// A titled group of links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    /// Section heading; `None` for the general section
    pub title: Option<&'static str>,
    /// Visible links
    pub items: Vec<NavItem>,
}

const GENERAL: [(&str, &str, Page); 4] = [
    ("Chatbot", "/chat", Page::Chatbot),
    ("Meetings", "/meetings", Page::Meetings),
    ("Equipment", "/equipment", Page::Equipment),
    ("Tickets", "/tickets", Page::Tickets),
];

const ADMIN: [(&str, &str, Page); 2] = [
    ("Overview", "/admin", Page::AdminOverview),
    (
        "Equipment Approval",
        "/admin/equipment-approval",
        Page::EquipmentApproval,
    ),
];

const SUPERUSER: [(&str, &str, Page); 3] = [
    ("Audit Logs", "/superuser/audit-logs", Page::AuditLogs),
    ("User Management", "/superuser/users", Page::UserManagement),
    ("All System Data", "/superuser/all-data", Page::AllSystemData),
];

fn section(
    title: Option<&'static str>,
    entries: &[(&'static str, &'static str, Page)],
    role: Option<Role>,
    table: &PermissionTable,
) -> Option<NavSection> {
    let items: Vec<NavItem> = entries
        .iter()
        .filter(|(_, _, page)| table.allows(role, *page))
        .map(|(label, path, page)| NavItem {
            label,
            path,
            page: *page,
        })
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(NavSection { title, items })
    }
}

/// Visible menu for a role. Empty sections are omitted; an absent role
/// yields an empty menu.
pub fn menu_for(role: Option<Role>, table: &PermissionTable) -> Vec<NavSection> {
    [
        section(None, &GENERAL, role, table),
        section(Some("Admin"), &ADMIN, role, table),
        section(Some("Superuser"), &SUPERUSER, role, table),
    ]
    .into_iter()
    .flatten()
    .collect()
}
