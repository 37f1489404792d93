//! Admin and superuser endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::equipment::EquipmentItem;
use crate::api::meetings::Meeting;
use crate::api::tickets::Ticket;
use crate::auth::role::Role;
use crate::error::Result;

/// Dashboard data for the admin overview (admin, superuser).
#[derive(Debug, Clone, Deserialize)]
pub struct AdminOverview {
    /// All meetings
    pub meetings: Vec<Meeting>,
    /// All tickets
    pub tickets: Vec<Ticket>,
    /// All equipment
    pub equipment: Vec<EquipmentItem>,
}

/// Full system dump (superuser only).
#[derive(Debug, Clone, Deserialize)]
pub struct AllSystemData {
    /// All user accounts
    pub users: Vec<ManagedUser>,
    /// All meetings
    pub meetings: Vec<Meeting>,
    /// All tickets
    pub tickets: Vec<Ticket>,
    /// All equipment
    pub equipment: Vec<EquipmentItem>,
}

/// A user account as seen by user management.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagedUser {
    /// User id
    pub id: String,
    /// Login name
    pub username: String,
    /// Privilege tier
    pub role: Role,
    /// False while suspended
    pub active: bool,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
}

/// One audit trail record.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditEntry {
    /// When the event was recorded
    pub ts: DateTime<Utc>,
    /// Request the event belongs to
    #[serde(default)]
    pub request_id: Option<String>,
    /// Who acted
    pub actor_id: String,
    /// Role of the actor at the time
    pub actor_role: String,
    /// What happened (e.g. `TICKET_CREATED`)
    pub action: String,
    /// Kind of entity acted on
    #[serde(default)]
    pub entity_type: Option<String>,
    /// Entity acted on
    #[serde(default)]
    pub entity_id: Option<String>,
    /// Entity state before the action
    #[serde(default)]
    pub before: Option<serde_json::Value>,
    /// Entity state after the action
    #[serde(default)]
    pub after: Option<serde_json::Value>,
}

impl ApiClient {
    /// Admin dashboard data.
    pub async fn admin_overview(&self) -> Result<AdminOverview> {
        self.get("/admin/overview").await
    }

    /// Audit trail.
    pub async fn audit_logs(&self) -> Result<Vec<AuditEntry>> {
        self.get("/admin/audit-log").await
    }

    /// Full system dump.
    pub async fn all_system_data(&self) -> Result<AllSystemData> {
        self.get("/admin/all-data").await
    }

    /// Suspend an account.
    pub async fn suspend_user(&self, user_id: &str) -> Result<serde_json::Value> {
        self.post("/admin/user/suspend", &json!({ "user_id": user_id }))
            .await
    }

    /// Lift a suspension.
    pub async fn unsuspend_user(&self, user_id: &str) -> Result<serde_json::Value> {
        self.post("/admin/user/unsuspend", &json!({ "user_id": user_id }))
            .await
    }
}
