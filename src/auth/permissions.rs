//! Page permission table
//!
//! Static mapping from page identifier to the set of roles allowed to view
//! it. Loaded once at process start, immutable thereafter; completeness is
//! validated at build time so a referenced page can never miss an entry at
//! access time.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::auth::role::Role;
use crate::error::{PortalError, Result};

/// Symbolic name for a guarded view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Page {
    /// Chat assistant
    Chatbot,
    /// Meeting booking
    Meetings,
    /// Equipment requests
    Equipment,
    /// Support tickets
    Tickets,
    /// Admin dashboard
    AdminOverview,
    /// Pending equipment approval queue
    EquipmentApproval,
    /// Audit trail
    AuditLogs,
    /// User suspension management
    UserManagement,
    /// Full system data dump
    AllSystemData,
}

impl Page {
    /// Every defined page.
    pub const ALL: [Page; 9] = [
        Page::Chatbot,
        Page::Meetings,
        Page::Equipment,
        Page::Tickets,
        Page::AdminOverview,
        Page::EquipmentApproval,
        Page::AuditLogs,
        Page::UserManagement,
        Page::AllSystemData,
    ];
}

/// Role sets allowed per page. Pure lookup table, no I/O.
#[derive(Debug, Clone)]
pub struct PermissionTable {
    entries: HashMap<Page, HashSet<Role>>,
}

impl PermissionTable {
    /// Table matching the portal defaults: common pages for every role,
    /// admin pages for admin and superuser, superuser pages for superuser
    /// only.
    pub fn new() -> Self {
        let mut entries = HashMap::new();

        for page in [Page::Chatbot, Page::Meetings, Page::Equipment, Page::Tickets] {
            entries.insert(page, HashSet::from(Role::ALL));
        }
        for page in [Page::AdminOverview, Page::EquipmentApproval] {
            entries.insert(page, HashSet::from([Role::Admin, Role::Superuser]));
        }
        for page in [Page::AuditLogs, Page::UserManagement, Page::AllSystemData] {
            entries.insert(page, HashSet::from([Role::Superuser]));
        }

        debug!("initialized permission table with {} pages", entries.len());
        Self { entries }
    }

    /// Start a custom table.
    pub fn builder() -> PermissionTableBuilder {
        PermissionTableBuilder {
            entries: HashMap::new(),
        }
    }

    /// Whether `role` may view `page`.
    ///
    /// Fails closed: an absent role (unauthenticated) and an unconfigured
    /// page both deny.
    pub fn allows(&self, role: Option<Role>, page: Page) -> bool {
        let Some(role) = role else {
            return false;
        };
        self.entries
            .get(&page)
            .map(|roles| roles.contains(&role))
            .unwrap_or(false)
    }

    /// Roles configured for `page`, if any.
    pub fn allowed_roles(&self, page: Page) -> Option<&HashSet<Role>> {
        self.entries.get(&page)
    }
}

impl Default for PermissionTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for custom permission tables.
pub struct PermissionTableBuilder {
    entries: HashMap<Page, HashSet<Role>>,
}

impl PermissionTableBuilder {
    /// Grant `roles` access to `page`.
    pub fn allow(mut self, page: Page, roles: &[Role]) -> Self {
        self.entries
            .entry(page)
            .or_default()
            .extend(roles.iter().copied());
        self
    }

    /// Validate and build. Every defined page must have an entry; a table
    /// with a missing page is a configuration error, caught here rather
    /// than at access time.
    pub fn build(self) -> Result<PermissionTable> {
        for page in Page::ALL {
            if !self.entries.contains_key(&page) {
                return Err(PortalError::Config(format!(
                    "permission table has no entry for page {page:?}"
                )));
            }
        }
        Ok(PermissionTable {
            entries: self.entries,
        })
    }
}
